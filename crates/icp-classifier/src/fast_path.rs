//! Precomputed decisions for common titles.
//!
//! Every entry is produced by running the rule stages on the title at
//! startup, so a lookup returns exactly what the full pipeline would.
//! Lookups happen after caller excludes, which keeps the veto intact.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::excludes::ExcludeSet;
use crate::pipeline::{decide_rules, Decision};
use crate::rules::RuleSet;

#[derive(Debug, Clone, Default)]
pub struct FastPath {
    entries: HashMap<String, Decision>,
}

impl FastPath {
    /// Prime the table from normalised `titles`. Titles the pipeline does
    /// not classify are skipped.
    pub fn prime(rules: &RuleSet, titles: &[&str]) -> Self {
        let none = ExcludeSet::none();
        let mut entries = HashMap::with_capacity(titles.len());
        for title in titles {
            match decide_rules(rules, title, &none) {
                Some(decision) => {
                    entries.insert(title.to_string(), decision);
                }
                None => warn!(title, "Fast-path title has no classification; skipped"),
            }
        }
        debug!(entries = entries.len(), "Fast path primed");
        Self { entries }
    }

    /// Decision for normalised `text`, marked as served from the fast path.
    pub fn lookup(&self, text: &str) -> Option<Decision> {
        let mut decision = self.entries.get(text)?.clone();
        decision.why.fast_path = true;
        Some(decision)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
