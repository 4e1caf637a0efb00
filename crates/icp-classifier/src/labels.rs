//! Label post-processing: singular role labels and final record assembly.
//!
//! Singularisation is best-effort. Irregular plurals belong in
//! [`SINGULARS`]; everything else goes through a Spanish-leaning suffix
//! heuristic.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::pipeline::Decision;
use crate::record::ClassificationRecord;
use crate::rules::RuleSet;

/// Curated plural → singular labels.
const SINGULARS: &[(&str, &str)] = &[
    ("owners", "owner"),
    ("directores generales", "director general"),
    ("directores asociados", "director asociado"),
    ("directores regionales", "director regional"),
    ("directores ejecutivos", "director ejecutivo"),
    ("gerentes regionales", "gerente regional"),
    ("líderes técnicos", "líder técnico"),
    ("directores técnicos", "director técnico"),
    ("responsables técnicos", "responsable técnico"),
    ("directores comerciales", "director comercial"),
    ("controllers financieros", "controller financiero"),
    ("engineering managers", "engineering manager"),
    ("brand managers", "brand manager"),
    ("product marketing managers", "product marketing manager"),
    ("key account managers", "key account manager"),
    ("customer success managers", "customer success manager"),
    ("HR business partners", "HR business partner"),
    ("general counsels", "general counsel"),
    ("compliance officers", "compliance officer"),
    ("product owners", "product owner"),
    ("product managers", "product manager"),
    ("program managers", "program manager"),
    ("controllers", "controller"),
    ("contables", "contable"),
    ("tesoreros", "tesorero"),
];

fn singulars() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| SINGULARS.iter().copied().collect())
}

/// Endings kept as-is by the trailing-"s" rule.
const EXEMPT_SUFFIXES: &[&str] = &["ss", "us", "is"];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'á' | 'é' | 'í' | 'ó' | 'ú')
}

/// Singularise one word.
///
/// "-es" is stripped when what remains is at least three characters and
/// ends in a vowel followed by r, l, n, d, z, j or y (directores, líderes,
/// regionales). Otherwise a trailing "s" is stripped unless the word ends
/// in an exempt suffix.
pub fn singularise_word(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("es") {
        let mut tail = stem.chars().rev();
        let consonant = tail.next();
        let before = tail.next();
        if stem.chars().count() >= 3
            && matches!(consonant, Some('r' | 'l' | 'n' | 'd' | 'z' | 'j' | 'y'))
            && before.is_some_and(is_vowel)
        {
            return stem.to_string();
        }
    }
    if EXEMPT_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return word.to_string();
    }
    word.strip_suffix('s').unwrap_or(word).to_string()
}

/// Singular form of a plural role label.
pub fn singularise(label: &str) -> String {
    if let Some(singular) = singulars().get(label) {
        return (*singular).to_string();
    }
    if let Some((head, tail)) = label.split_once(" de ") {
        return format!("{} de {}", singularise_word(head), tail);
    }
    if !label.is_empty() && !label.contains(' ') {
        return singularise_word(label);
    }
    label.to_string()
}

/// Turn a pipeline decision into the output record.
pub fn finish(rules: &RuleSet, input: &str, text: &str, decision: Decision) -> ClassificationRecord {
    ClassificationRecord {
        input: input.to_string(),
        is_icp: true,
        department: decision.department.as_str().to_string(),
        subdivision: rules.subdivision(decision.department, text).to_string(),
        hierarchy_level: rules.hierarchy_level(text).as_str().to_string(),
        role_generic_singular: singularise(&decision.role),
        role_generic: decision.role,
        why: decision.why,
    }
}
