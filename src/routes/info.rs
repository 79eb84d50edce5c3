//! Server information endpoint.

use axum::Json;
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::host;

/// Server name reported to clients. Existing target-group checks match on
/// this exact string.
pub const SERVER_NAME: &str = "Flask Backend";

/// Info response body.
#[derive(Serialize)]
pub struct InfoPayload {
    pub server: &'static str,
    pub version: &'static str,
    pub hostname: String,
}

/// Server information handler.
///
/// Reports constant identity fields plus the current hostname. No address
/// resolution happens here, so DNS trouble cannot fail this route.
#[instrument(name = "info::info")]
pub async fn info() -> Result<Json<InfoPayload>, AppError> {
    Ok(Json(InfoPayload {
        server: SERVER_NAME,
        version: env!("CARGO_PKG_VERSION"),
        hostname: host::local_hostname()?,
    }))
}
