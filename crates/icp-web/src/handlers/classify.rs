//! Title classification endpoints.

use axum::{extract::State, response::Json};
use icp_classifier::{split_csv, ClassificationRecord, ExcludeSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub job_title: String,
    /// Comma-separated literal phrases or `/regex/` items
    #[serde(default)]
    pub excludes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    /// Comma-separated titles
    #[serde(default)]
    pub job_titles: String,
    #[serde(default)]
    pub excludes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: Vec<ClassificationRecord>,
}

/// POST /classify: Classify one title
pub async fn classify(
    State(state): State<SharedState>,
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<ClassificationRecord>, ApiError> {
    let excludes = ExcludeSet::parse(req.excludes.as_deref())?;
    let record = state.classifier.classify(&req.job_title, &excludes);
    Ok(Json(record))
}

/// POST /classify/batch: Classify a comma-separated list of titles
pub async fn classify_batch(
    State(state): State<SharedState>,
    Json(req): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, ApiError> {
    let excludes = ExcludeSet::parse(req.excludes.as_deref())?;
    let titles = split_csv(Some(req.job_titles.as_str()));
    debug!(titles = titles.len(), excludes = excludes.len(), "Batch classification");

    let results = state.classifier.classify_many(&titles, &excludes);
    Ok(Json(BatchResponse { results }))
}
