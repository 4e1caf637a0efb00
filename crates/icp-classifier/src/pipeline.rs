//! The ordered classification pipeline.
//!
//! Stages run strictly in order and the first positive decision wins. The
//! overlap between tables ("director" appears in the C-suite, override, solo
//! and department tables) is resolved purely by that order.
//!
//! All functions here take already-normalised text.

use tracing::debug;

use crate::excludes::ExcludeSet;
use crate::record::{Department, Stage, Why};
use crate::rules::{first_rule, tables, RuleSet};

/// A positive decision, before hierarchy, sub-division and singular label
/// are derived.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub department: Department,
    pub role: String,
    pub why: Why,
}

impl Decision {
    fn new(stage: Stage, department: Department, role: impl Into<String>) -> Self {
        let role = role.into();
        Self {
            why: Why::stage(stage, role.clone()),
            department,
            role,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A caller exclude matched.
    Excluded,
    /// No stage produced a decision.
    NoMatch,
    Matched(Decision),
}

/// Run the full pipeline, caller excludes first.
pub fn decide(rules: &RuleSet, text: &str, excludes: &ExcludeSet) -> Outcome {
    if excludes.matches(text) {
        debug!(text, "Vetoed by caller excludes");
        return Outcome::Excluded;
    }
    match decide_rules(rules, text, excludes) {
        Some(decision) => Outcome::Matched(decision),
        None => {
            debug!(text, "No stage matched");
            Outcome::NoMatch
        }
    }
}

/// Stages 3 to 10. Caller excludes are still applied where a stage unions
/// them with its own excludes.
pub fn decide_rules(rules: &RuleSet, text: &str, excludes: &ExcludeSet) -> Option<Decision> {
    let decision = owners(rules, text)
        .or_else(|| general_management(rules, text))
        .or_else(|| c_suite(rules, text))
        .or_else(|| generic_override(rules, text))
        .or_else(|| solo_title(rules, text))
        .or_else(|| standalone_department(rules, text))
        .or_else(|| project_manager(rules, text, excludes))
        .or_else(|| department(rules, text, excludes))?;

    debug!(
        text,
        stage = ?decision.why.stage,
        department = %decision.department,
        role = %decision.role,
        "Title classified"
    );
    Some(decision)
}

// ── Stages ──────────────────────────────────────────────────────────────────

fn owners(rules: &RuleSet, text: &str) -> Option<Decision> {
    if !rules.owners.fires(text) {
        return None;
    }
    // A specific C-level role outranks the generic owners label.
    if let Some(rule) = first_rule(&rules.c_suite, text) {
        let mut decision = Decision::new(Stage::Owners, rule.department, rule.label);
        decision.why.c_suite_override = true;
        return Some(decision);
    }
    Some(Decision::new(Stage::Owners, Department::Executive, tables::OWNERS_LABEL))
}

fn general_management(rules: &RuleSet, text: &str) -> Option<Decision> {
    let rule = &rules.general_management;
    rule.matches(text)
        .then(|| Decision::new(Stage::GeneralManagement, rule.department, rule.label))
}

fn c_suite(rules: &RuleSet, text: &str) -> Option<Decision> {
    first_rule(&rules.c_suite, text).map(|r| Decision::new(Stage::CSuite, r.department, r.label))
}

fn generic_override(rules: &RuleSet, text: &str) -> Option<Decision> {
    first_rule(&rules.generic_overrides, text)
        .map(|r| Decision::new(Stage::GenericOverride, r.department, r.label))
}

fn solo_title(rules: &RuleSet, text: &str) -> Option<Decision> {
    first_rule(&rules.solo_titles, text).map(|r| Decision::new(Stage::SoloTitle, r.department, r.label))
}

fn standalone_department(rules: &RuleSet, text: &str) -> Option<Decision> {
    let (_, department) = rules.standalone.iter().find(|(m, _)| m.matches(text))?;
    Some(Decision::new(
        Stage::StandaloneDepartment,
        *department,
        format!("responsables de {}", department.label()),
    ))
}

fn project_manager(rules: &RuleSet, text: &str, excludes: &ExcludeSet) -> Option<Decision> {
    if !rules.project_manager.any_match(text) {
        return None;
    }

    let (hint, department) = rules
        .project_hints
        .iter()
        .find(|h| h.patterns.any_match(text))
        .map(|h| (h.name, h.department))
        .unwrap_or((tables::PROJECT_DEFAULT_HINT, Department::Technology));

    let excluded = rules
        .profile(department)
        .is_some_and(|p| p.exclude.any_match(text))
        || excludes.matches(text);
    if excluded {
        debug!(text, hint, "Project role excluded by department, falling through");
        return None;
    }

    let word = rules.seniority_word(text).unwrap_or("responsables");
    let mut decision = Decision::new(Stage::ProjectManager, department, format!("{word} de proyectos"));
    decision.why.hint = Some(hint.to_string());
    Some(decision)
}

fn department(rules: &RuleSet, text: &str, excludes: &ExcludeSet) -> Option<Decision> {
    let marketing_signal = rules
        .profile(Department::Marketing)
        .is_some_and(|p| p.must.any_match(text));

    for profile in &rules.departments {
        // Marketing wins any overlap with Sales.
        if profile.department == Department::Sales && marketing_signal {
            continue;
        }
        if !profile.must.any_match(text) || !profile.seniority.any_match(text) {
            continue;
        }
        if profile.exclude.any_match(text) || excludes.matches(text) {
            debug!(text, department = %profile.department, "Department excluded");
            continue;
        }

        let (role, area) = match profile.special(text) {
            Some(label) => (label.to_string(), None),
            None => match rules.seniority_word(text) {
                Some(word) => {
                    let area = profile.area(text);
                    (format!("{word} de {area}"), Some(area))
                }
                None => (format!("encargados de {}", profile.department.label()), None),
            },
        };

        let mut decision = Decision::new(Stage::Department, profile.department, role);
        decision.why.must = Some(true);
        decision.why.seniority = Some(true);
        decision.why.exclude = Some(false);
        decision.why.area = area.map(str::to_string);
        return Some(decision);
    }
    None
}
