//! icp-web: HTTP front end for the ICP job-title classifier.
//! Provides:
//!   - Single and batch title classification
//!   - Health and cache statistics endpoints
//!   - TOML/env configuration and logging setup

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
