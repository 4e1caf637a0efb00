//! HTTP handlers for all routes.

pub mod classify;
pub mod system;
