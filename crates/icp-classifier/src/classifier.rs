//! The classifier: rule set plus the caches that sit in front of it.

use tracing::{debug, info};

use crate::cache::{CacheStats, ResultCache};
use crate::config::ClassifierConfig;
use crate::error::Result;
use crate::excludes::ExcludeSet;
use crate::fast_path::FastPath;
use crate::labels::finish;
use crate::normalise::Normaliser;
use crate::patterns::PatternCache;
use crate::pipeline::{decide, Outcome};
use crate::record::{ClassificationRecord, Why};
use crate::rules::{tables, RuleSet};

/// Thread-safe job-title classifier. Share it behind an `Arc`.
pub struct Classifier {
    rules: RuleSet,
    patterns: PatternCache,
    normaliser: Normaliser,
    fast_path: Option<FastPath>,
    results: ResultCache,
}

impl Classifier {
    /// Compile the rule tables and prime the fast path.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        let patterns = PatternCache::new();
        let rules = RuleSet::new(&patterns)?;

        let fast_path = config
            .fast_path
            .then(|| FastPath::prime(&rules, tables::FAST_PATH_TITLES));

        info!(
            compiled_patterns = patterns.len(),
            departments = rules.departments.len(),
            c_suite_rules = rules.c_suite.len(),
            fast_path_entries = fast_path.as_ref().map_or(0, FastPath::len),
            result_cache = config.result_cache_size,
            "Classifier ready"
        );

        Ok(Self {
            rules,
            patterns,
            normaliser: Normaliser::new(config.normaliser_cache_size),
            fast_path,
            results: ResultCache::new(config.result_cache_size),
        })
    }

    /// Classify one raw title. Never fails: unknown or empty titles yield a
    /// negative record with an explanatory `why`.
    pub fn classify(&self, title: &str, excludes: &ExcludeSet) -> ClassificationRecord {
        let cacheable = excludes.is_empty();
        if cacheable {
            if let Some(record) = self.results.get(title) {
                return record;
            }
        }

        let text = self.normaliser.normalise(title);
        let record = match self.outcome(&text, excludes) {
            Outcome::Excluded => ClassificationRecord::rejected(title, Why::excluded()),
            Outcome::NoMatch => ClassificationRecord::rejected(title, Why::no_match()),
            Outcome::Matched(decision) => finish(&self.rules, title, &text, decision),
        };

        if cacheable {
            self.results.put(title, record.clone());
        }
        record
    }

    /// Classify several titles against one exclude set.
    pub fn classify_many<S: AsRef<str>>(&self, titles: &[S], excludes: &ExcludeSet) -> Vec<ClassificationRecord> {
        titles.iter().map(|t| self.classify(t.as_ref(), excludes)).collect()
    }

    fn outcome(&self, text: &str, excludes: &ExcludeSet) -> Outcome {
        // The fast path must never shadow the exclude veto.
        if !excludes.matches(text) {
            if let Some(decision) = self.fast_path.as_ref().and_then(|f| f.lookup(text)) {
                debug!(text, role = %decision.role, "Fast-path hit");
                return Outcome::Matched(decision);
            }
        }
        decide(&self.rules, text, excludes)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            result_entries: self.results.len(),
            result_capacity: self.results.capacity(),
            result_hits: self.results.hits(),
            result_misses: self.results.misses(),
            normaliser_entries: self.normaliser.len(),
            normaliser_capacity: self.normaliser.capacity(),
            compiled_patterns: self.patterns.len(),
            fast_path_entries: self.fast_path.as_ref().map_or(0, FastPath::len),
        }
    }

    /// Drop every cached record. The normaliser and pattern caches are kept.
    pub fn clear_cache(&self) {
        self.results.clear();
    }
}
