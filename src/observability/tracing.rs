//! Per-request spans.
//!
//! Every request gets one span carrying its request id, so handler log lines
//! can be correlated with the `x-request-id` header returned to the client.

use axum::{body::Body, http::Request};
use tracing::Span;

use crate::http::request_id;

/// Span factory for `TraceLayer::make_span_with`.
pub fn request_span(request: &Request<Body>) -> Span {
    let request_id = request_id(request).unwrap_or("unknown");

    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    )
}
