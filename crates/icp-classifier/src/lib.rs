//! ICP Job-Title Classifier
//!
//! Turns free-text job titles (Spanish or English) into an Ideal Customer
//! Profile decision plus a normalised role taxonomy: department,
//! sub-division, hierarchy level and a generic role label in plural and
//! singular form.
//!
//! # Features
//! - Ordered, data-driven rule pipeline; the first stage that decides wins
//! - Caller exclude patterns (literal phrases or `/regex/`) with absolute veto
//! - Memoised pattern compilation, normaliser cache and LRU result cache
//! - Fast path for common titles, primed from the full pipeline
//!
//! # Example
//! ```rust
//! use icp_classifier::{Classifier, ClassifierConfig, ExcludeSet};
//!
//! fn main() -> icp_classifier::Result<()> {
//!     let classifier = Classifier::new(ClassifierConfig::default())?;
//!
//!     let record = classifier.classify("Head of Marketing", &ExcludeSet::none());
//!     assert!(record.is_icp);
//!     assert_eq!(record.department, "Marketing");
//!     assert_eq!(record.role_generic, "directores de marketing");
//!
//!     let excludes = ExcludeSet::parse(Some("intern, /^junior/"))?;
//!     let record = classifier.classify("Marketing Intern", &excludes);
//!     assert!(!record.is_icp);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod classifier;
pub mod config;
pub mod error;
pub mod excludes;
pub mod fast_path;
pub mod labels;
pub mod normalise;
pub mod patterns;
pub mod pipeline;
pub mod record;
pub mod rules;

pub use cache::CacheStats;
pub use classifier::Classifier;
pub use config::ClassifierConfig;
pub use error::{ClassifyError, Result};
pub use excludes::{split_csv, to_regex, ExcludeSet};
pub use labels::singularise;
pub use normalise::normalise;
pub use record::{ClassificationRecord, Department, HierarchyLevel, Stage, Why};
