//! Compiled pattern cache and pattern sets.
//!
//! All rule patterns are compiled case-insensitively and memoised by their
//! literal text, so a pattern shared by several tables (the seniority
//! alternations appear in most department profiles) is compiled once.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use regex::{Regex, RegexBuilder};

use crate::error::{ClassifyError, Result};

/// A compiled, case-insensitive pattern.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Arc<Regex>,
}

impl Matcher {
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Compile a pattern case-insensitively without touching any cache.
pub(crate) fn compile_uncached(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Process-wide memo of pattern text → compiled matcher. Append-only.
#[derive(Default)]
pub struct PatternCache {
    compiled: RwLock<HashMap<String, Arc<Regex>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `pattern`, reusing an earlier compilation of the same text.
    ///
    /// Two threads racing on the same new pattern may both compile it; the
    /// second insert overwrites the first with an identical regex.
    pub fn compile(&self, pattern: &str) -> Result<Matcher> {
        {
            let compiled = self.compiled.read().unwrap_or_else(|e| e.into_inner());
            if let Some(regex) = compiled.get(pattern) {
                return Ok(Matcher { regex: Arc::clone(regex) });
            }
        }

        let regex = compile_uncached(pattern).map_err(|source| ClassifyError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        let regex = Arc::new(regex);

        self.compiled
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(pattern.to_string(), Arc::clone(&regex));
        Ok(Matcher { regex })
    }

    /// Compile every pattern of a table into a [`PatternSet`].
    pub fn compile_set(&self, patterns: &[&str]) -> Result<PatternSet> {
        let matchers = patterns
            .iter()
            .map(|p| self.compile(p))
            .collect::<Result<Vec<_>>>()?;
        Ok(PatternSet { matchers })
    }

    /// Number of distinct compiled patterns.
    pub fn len(&self) -> usize {
        self.compiled.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An ordered set of matchers evaluated with OR semantics.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    matchers: Vec<Matcher>,
}

impl PatternSet {
    /// True if any pattern matches. Short-circuits on the first hit; an
    /// empty set never matches.
    pub fn any_match(&self, text: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(text))
    }

    /// The first pattern that matches, in declaration order.
    pub fn first_match(&self, text: &str) -> Option<&Matcher> {
        self.matchers.iter().find(|m| m.matches(text))
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

/// A pattern set that fires only when none of its `unless` patterns match.
///
/// Used where a broad term has well-known false friends: "president" versus
/// "vice president", "owner" versus "product owner".
#[derive(Debug, Clone, Default)]
pub struct GatedSet {
    pub any: PatternSet,
    pub unless: PatternSet,
}

impl GatedSet {
    pub fn new(cache: &PatternCache, any: &[&str], unless: &[&str]) -> Result<Self> {
        Ok(Self {
            any: cache.compile_set(any)?,
            unless: cache.compile_set(unless)?,
        })
    }

    pub fn fires(&self, text: &str) -> bool {
        self.any.any_match(text) && !self.unless.any_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_is_memoised() {
        let cache = PatternCache::new();
        let a = cache.compile(r"\bceo\b").unwrap();
        let b = cache.compile(r"\bceo\b").unwrap();
        assert_eq!(cache.len(), 1);
        assert!(Arc::ptr_eq(&a.regex, &b.regex));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let cache = PatternCache::new();
        let m = cache.compile(r"\bhead of marketing\b").unwrap();
        assert!(m.matches("Head Of Marketing"));
        assert!(!m.matches("headmaster"));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let cache = PatternCache::new();
        let err = cache.compile(r"(unclosed").unwrap_err();
        assert!(matches!(err, ClassifyError::InvalidPattern { .. }));
        assert!(!err.is_caller_error());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_pattern_set_semantics() {
        let cache = PatternCache::new();
        let set = cache.compile_set(&[r"\bcto\b", r"\bcio\b"]).unwrap();
        assert!(set.any_match("cio"));
        assert_eq!(set.first_match("cto y cio").map(Matcher::as_str), Some(r"\bcto\b"));
        assert!(!PatternSet::default().any_match("anything"));
    }

    #[test]
    fn test_gated_set_respects_unless() {
        let cache = PatternCache::new();
        let gate = GatedSet::new(&cache, &[r"\bpresident\b"], &[r"\bvice\b"]).unwrap();
        assert!(gate.fires("president"));
        assert!(!gate.fires("vice president"));
    }
}
