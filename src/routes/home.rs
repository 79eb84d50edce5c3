//! Root endpoint reporting overall health and host identity.

use std::net::Ipv4Addr;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use crate::config::environment;
use crate::error::AppError;
use crate::host;
use crate::state::AppState;

/// Root response body: overall status plus the identity of the instance that
/// answered, so targets behind a load balancer can be told apart.
#[derive(Serialize)]
pub struct HealthPayload {
    pub status: &'static str,
    pub message: &'static str,
    pub hostname: String,
    pub ip: Ipv4Addr,
    pub environment: String,
}

/// Root handler.
///
/// The hostname and address are looked up fresh on every request, and the
/// environment tag is read from `ENV` at request time.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<HealthPayload>, AppError> {
    let identity = host::lookup(state.config.lookup.timeout()).await?;

    Ok(Json(HealthPayload {
        status: "healthy",
        message: "Backend server is running!",
        hostname: identity.hostname,
        ip: identity.ip,
        environment: environment(),
    }))
}
