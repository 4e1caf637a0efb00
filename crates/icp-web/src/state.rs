//! Shared application state for the web server.

use std::sync::Arc;

use icp_classifier::{Classifier, ClassifierConfig};

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<Classifier>,
}

impl AppState {
    /// Build the classifier. Fails only if a built-in rule pattern is malformed.
    pub fn new(config: ClassifierConfig) -> anyhow::Result<Self> {
        let classifier = Classifier::new(config)?;
        Ok(Self { classifier: Arc::new(classifier) })
    }
}

pub type SharedState = Arc<AppState>;
