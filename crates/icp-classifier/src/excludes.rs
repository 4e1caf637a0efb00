//! Caller-supplied exclude patterns.
//!
//! Callers send a comma-separated list where each item is either a literal
//! phrase (`intern`) or a `/regex/`. Literals are normalised, escaped and
//! word-bounded; regexes are taken verbatim. Exclude sets are compiled per
//! request and never enter the shared [`PatternCache`](crate::patterns::PatternCache).

use regex::Regex;

use crate::error::{ClassifyError, Result};
use crate::normalise::normalise;
use crate::patterns::compile_uncached;

/// Split a comma-separated list, trimming items and dropping empty ones.
pub fn split_csv(s: Option<&str>) -> Vec<String> {
    match s {
        Some(s) => s
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

/// Expand exclude items into regex source text.
///
/// A literal that normalises to nothing (`€`, emoji) can never occur in a
/// normalised title, so it is dropped rather than becoming `\b\b`.
pub fn to_regex<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| {
            let item = item.as_ref();
            if item.len() >= 2 && item.starts_with('/') && item.ends_with('/') {
                return Some(item[1..item.len() - 1].to_string());
            }
            let literal = normalise(item);
            (!literal.is_empty()).then(|| format!(r"\b{}\b", regex::escape(&literal)))
        })
        .collect()
}

/// A compiled set of caller excludes.
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    patterns: Vec<Regex>,
}

impl ExcludeSet {
    /// The empty set; matches nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Parse the raw `excludes` request field.
    pub fn parse(csv: Option<&str>) -> Result<Self> {
        Self::compile(to_regex(&split_csv(csv)))
    }

    /// Compile already-expanded regex sources. Fails on the first pattern
    /// that does not compile.
    pub fn compile<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                compile_uncached(p).map_err(|source| ClassifyError::InvalidExclude {
                    pattern: p.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}
