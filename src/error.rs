use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::io;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read local hostname: {0}")]
    Hostname(#[source] io::Error),

    #[error("Failed to resolve address for {host}: {source}")]
    Resolve {
        host: String,
        #[source]
        source: io::Error,
    },

    #[error("No IPv4 address found for {0}")]
    NoIpv4(String),

    #[error("Hostname resolution timed out after {}s", .0.as_secs())]
    ResolveTimeout(Duration),
}

/// JSON body returned for failed requests.
#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // A failed request must never take the listener down with it.
        tracing::error!(error = %self, "Request failed");

        let body = ErrorBody {
            status: "error",
            message: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
