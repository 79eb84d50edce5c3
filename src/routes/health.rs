//! Dedicated health check endpoint for load balancer target groups.
//!
//! Returns 200 OK when the process is running. This is a liveness probe - it
//! performs no external calls and never fails.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Probe response body.
#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Health check handler.
///
/// Returns a simple "ok" response to indicate the service is running.
pub async fn health() -> (StatusCode, Json<HealthStatus>) {
    (StatusCode::OK, Json(HealthStatus { status: "ok" }))
}
