//! Error type surfaced by the callback handlers.

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

/// Failures a [`CasCallback`](crate::CasCallback) can surface to the hosting application.
///
/// A failed or missing login is not an error here; those are outcomes with their own
/// callback methods. This type only covers a response that could not be produced at all.
#[derive(Debug, Error)]
pub enum CallbackError {
    /// The configured success-redirect URL is not a well-formed URI.
    #[error("invalid success URL: {0}")]
    InvalidSuccessUrl(#[from] http::uri::InvalidUri),

    /// The configured success-redirect URL cannot be carried in a `Location` header.
    #[error("success URL is not valid Location header material: {0}")]
    InvalidLocation(#[from] http::header::InvalidHeaderValue),

    /// A status payload could not be encoded as JSON.
    #[error("failed to encode status payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for CallbackError {
    fn into_response(self) -> Response {
        tracing::error!("CAS callback failed: {self}");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}
