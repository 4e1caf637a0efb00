//! Configuration for the classifier.

use serde::{Deserialize, Serialize};

fn default_result_cache_size() -> usize {
    10_000
}
fn default_normaliser_cache_size() -> usize {
    20_000
}
fn default_fast_path() -> bool {
    true
}

/// Cache sizes and the fast-path switch. Rule tables are not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Finished records kept in the LRU result cache (0 disables it)
    #[serde(default = "default_result_cache_size")]
    pub result_cache_size: usize,

    /// Raw strings whose normalised form is memoised
    #[serde(default = "default_normaliser_cache_size")]
    pub normaliser_cache_size: usize,

    /// Prime and consult the common-title table (default: true)
    #[serde(default = "default_fast_path")]
    pub fast_path: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            result_cache_size: default_result_cache_size(),
            normaliser_cache_size: default_normaliser_cache_size(),
            fast_path: default_fast_path(),
        }
    }
}

impl ClassifierConfig {
    /// No caches and no fast path: every call runs the full pipeline.
    pub fn uncached() -> Self {
        Self {
            result_cache_size: 0,
            normaliser_cache_size: 0,
            fast_path: false,
        }
    }

    pub fn with_result_cache_size(mut self, size: usize) -> Self {
        self.result_cache_size = size;
        self
    }

    pub fn with_normaliser_cache_size(mut self, size: usize) -> Self {
        self.normaliser_cache_size = size;
        self
    }

    pub fn with_fast_path(mut self, enabled: bool) -> Self {
        self.fast_path = enabled;
        self
    }
}
