//! Rule tables and their compiled form.
//!
//! The tables themselves are `'static` data in [`tables`], [`departments`]
//! and [`taxonomy`]. [`RuleSet::new`] compiles every pattern once through a
//! [`PatternCache`]; the resulting set is immutable and shared by reference.

pub mod departments;
pub mod tables;
pub mod taxonomy;

use tracing::debug;

use crate::error::Result;
use crate::patterns::{GatedSet, Matcher, PatternCache, PatternSet};
use crate::record::{Department, HierarchyLevel};

/// A static (patterns, label, department) rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub patterns: &'static [&'static str],
    pub label: &'static str,
    pub department: Department,
}

/// Static description of one department profile.
#[derive(Debug, Clone, Copy)]
pub struct DepartmentSpec {
    pub department: Department,
    pub must: &'static [&'static str],
    pub seniority: &'static [&'static str],
    pub exclude: &'static [&'static str],
    /// (area label, pattern), first match wins.
    pub areas: &'static [(&'static str, &'static str)],
    /// (pattern, fixed role label), first match wins.
    pub specials: &'static [(&'static str, &'static str)],
}

// ── Compiled forms ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Rule {
    pub patterns: PatternSet,
    pub label: &'static str,
    pub department: Department,
}

impl Rule {
    fn compile(cache: &PatternCache, spec: &RuleSpec) -> Result<Self> {
        Ok(Self {
            patterns: cache.compile_set(spec.patterns)?,
            label: spec.label,
            department: spec.department,
        })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.patterns.any_match(text)
    }
}

/// First rule in `rules` whose patterns match `text`.
pub fn first_rule<'a>(rules: &'a [Rule], text: &str) -> Option<&'a Rule> {
    rules.iter().find(|r| r.matches(text))
}

#[derive(Debug, Clone)]
pub struct DepartmentProfile {
    pub department: Department,
    pub must: PatternSet,
    pub seniority: PatternSet,
    pub exclude: PatternSet,
    pub areas: Vec<(&'static str, Matcher)>,
    pub specials: Vec<(Matcher, &'static str)>,
}

impl DepartmentProfile {
    fn compile(cache: &PatternCache, spec: &DepartmentSpec) -> Result<Self> {
        let areas = spec
            .areas
            .iter()
            .map(|(label, p)| Ok((*label, cache.compile(p)?)))
            .collect::<Result<Vec<_>>>()?;
        let specials = spec
            .specials
            .iter()
            .map(|(p, label)| Ok((cache.compile(p)?, *label)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            department: spec.department,
            must: cache.compile_set(spec.must)?,
            seniority: cache.compile_set(spec.seniority)?,
            exclude: cache.compile_set(spec.exclude)?,
            areas,
            specials,
        })
    }

    /// Fixed label of the first special override that matches.
    pub fn special(&self, text: &str) -> Option<&'static str> {
        self.specials
            .iter()
            .find(|(m, _)| m.matches(text))
            .map(|(_, label)| *label)
    }

    /// First matching area, falling back to the department's own name.
    pub fn area(&self, text: &str) -> &'static str {
        self.areas
            .iter()
            .find(|(_, m)| m.matches(text))
            .map(|(label, _)| *label)
            .unwrap_or_else(|| self.department.label())
    }
}

#[derive(Debug, Clone)]
pub struct ProjectHint {
    pub name: &'static str,
    pub department: Department,
    pub patterns: PatternSet,
}

#[derive(Debug, Clone)]
pub struct SeniorityWord {
    pub matcher: Matcher,
    pub plural: &'static str,
}

// ── Rule set ────────────────────────────────────────────────────────────────

/// Every compiled table the pipeline consults. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub owners: GatedSet,
    pub general_management: Rule,
    pub c_suite: Vec<Rule>,
    pub generic_overrides: Vec<Rule>,
    pub solo_titles: Vec<Rule>,
    pub standalone: Vec<(Matcher, Department)>,
    pub project_manager: PatternSet,
    pub project_hints: Vec<ProjectHint>,
    pub departments: Vec<DepartmentProfile>,
    pub seniority_words: Vec<SeniorityWord>,
    pub c_suite_tier: GatedSet,
    pub tiers: Vec<(HierarchyLevel, PatternSet)>,
    pub subdivisions: Vec<(Department, Vec<(&'static str, Matcher)>)>,
}

impl RuleSet {
    /// Compile all built-in tables. An error here means a malformed
    /// built-in pattern.
    pub fn new(cache: &PatternCache) -> Result<Self> {
        let rules = |specs: &[RuleSpec]| -> Result<Vec<Rule>> {
            specs.iter().map(|s| Rule::compile(cache, s)).collect()
        };

        let standalone = tables::STANDALONE_DEPARTMENTS
            .iter()
            .map(|(p, dept)| Ok((cache.compile(p)?, *dept)))
            .collect::<Result<Vec<_>>>()?;

        let project_hints = tables::PROJECT_HINTS
            .iter()
            .map(|(name, dept, patterns)| {
                Ok(ProjectHint {
                    name: *name,
                    department: *dept,
                    patterns: cache.compile_set(patterns)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let departments = departments::DEPARTMENTS
            .iter()
            .map(|spec| DepartmentProfile::compile(cache, spec))
            .collect::<Result<Vec<_>>>()?;

        let seniority_words = tables::SENIORITY_WORDS
            .iter()
            .map(|(p, plural)| {
                Ok(SeniorityWord {
                    matcher: cache.compile(p)?,
                    plural: *plural,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let tiers = taxonomy::TIERS
            .iter()
            .map(|(level, patterns)| Ok((*level, cache.compile_set(patterns)?)))
            .collect::<Result<Vec<_>>>()?;

        let subdivisions = taxonomy::SUBDIVISIONS
            .iter()
            .map(|(dept, table)| {
                let table = table
                    .iter()
                    .map(|(label, p)| Ok((*label, cache.compile(p)?)))
                    .collect::<Result<Vec<_>>>()?;
                Ok((*dept, table))
            })
            .collect::<Result<Vec<_>>>()?;

        let set = Self {
            owners: GatedSet::new(cache, tables::OWNERS, tables::OWNERS_UNLESS)?,
            general_management: Rule::compile(cache, &tables::GENERAL_MANAGEMENT)?,
            c_suite: rules(tables::C_SUITE)?,
            generic_overrides: rules(tables::GENERIC_OVERRIDES)?,
            solo_titles: rules(tables::SOLO_TITLES)?,
            standalone,
            project_manager: cache.compile_set(tables::PROJECT_MANAGER)?,
            project_hints,
            departments,
            seniority_words,
            c_suite_tier: GatedSet::new(cache, taxonomy::C_SUITE_TIER, taxonomy::C_SUITE_TIER_UNLESS)?,
            tiers,
            subdivisions,
        };

        debug!(
            c_suite = set.c_suite.len(),
            departments = set.departments.len(),
            patterns = cache.len(),
            "Rule set compiled"
        );
        Ok(set)
    }

    pub fn profile(&self, department: Department) -> Option<&DepartmentProfile> {
        self.departments.iter().find(|p| p.department == department)
    }

    /// Plural seniority word for the highest-priority term in `text`.
    pub fn seniority_word(&self, text: &str) -> Option<&'static str> {
        self.seniority_words
            .iter()
            .find(|w| w.matcher.matches(text))
            .map(|w| w.plural)
    }

    /// First matching tier; Specialist when none does.
    pub fn hierarchy_level(&self, text: &str) -> HierarchyLevel {
        if self.c_suite_tier.fires(text) {
            return HierarchyLevel::CSuite;
        }
        self.tiers
            .iter()
            .find(|(_, patterns)| patterns.any_match(text))
            .map(|(level, _)| *level)
            .unwrap_or(HierarchyLevel::Specialist)
    }

    pub fn subdivision(&self, department: Department, text: &str) -> &'static str {
        self.subdivisions
            .iter()
            .find(|(dept, _)| *dept == department)
            .and_then(|(_, table)| table.iter().find(|(_, m)| m.matches(text)))
            .map(|(label, _)| *label)
            .unwrap_or(taxonomy::DEFAULT_SUBDIVISION)
    }
}
