//! Error types for the classification engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClassifyError>;

#[derive(Error, Debug)]
pub enum ClassifyError {
    /// A built-in rule pattern failed to compile. Raised while the rule set
    /// is being built, never during classification.
    #[error("Invalid rule pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A caller-supplied `/regex/` exclude failed to compile.
    #[error("Invalid exclude pattern `{pattern}`: {source}")]
    InvalidExclude {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl ClassifyError {
    /// True when the error was caused by caller input rather than the rule tables.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, ClassifyError::InvalidExclude { .. })
    }
}
