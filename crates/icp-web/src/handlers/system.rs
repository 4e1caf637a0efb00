//! Health and cache introspection.

use axum::{extract::State, response::Json};
use icp_classifier::CacheStats;
use serde::Serialize;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /cache-stats
pub async fn cache_stats(State(state): State<SharedState>) -> Json<CacheStats> {
    Json(state.classifier.stats())
}
