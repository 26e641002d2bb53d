//! Errors raised while reading or decoding a message body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors that can occur while turning a request body into a value.
///
/// Handlers never recover from these; they are returned as-is and the
/// `IntoResponse` impl maps them to a status code.
#[derive(Debug, Error)]
pub enum BodyError {
    /// The body stream failed before it was fully read.
    #[error("Failed to read request body: {0}")]
    Read(#[source] axum::Error),

    /// The body exceeded the configured size limit.
    #[error("Request body exceeds limit of {limit} bytes")]
    TooLarge { limit: usize },

    /// The body is not valid UTF-8.
    #[error("Request body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The body is not valid JSON for the target type.
    #[error("Failed to decode JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl BodyError {
    /// Status code reported to the client.
    pub fn status(&self) -> StatusCode {
        match self {
            BodyError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            BodyError::Read(_) | BodyError::InvalidUtf8(_) | BodyError::Decode(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for BodyError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = %status, error = %self, "Rejecting request body");
        (status, self.to_string()).into_response()
    }
}
