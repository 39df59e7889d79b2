//! Errors surfaced to relay callers as HTTP statuses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure of a relay request before any fragment was sent.
///
/// Failures after streaming started abort the response body instead.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The request body is not a JSON array of turns.
    #[error("invalid conversation: {0}")]
    BadRequest(#[from] serde_json::Error),
    /// The upstream refused the request or could not be reached.
    #[error("upstream failed: {0:#}")]
    Upstream(anyhow::Error),
}

impl RelayError {
    /// The HTTP status reported to the client.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::BadRequest(e) => format!("invalid conversation: {e}"),
            Self::Upstream(_) => "upstream request failed".to_owned(),
        };
        (status, body).into_response()
    }
}
