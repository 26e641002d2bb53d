//! Response helpers.
//!
//! # Responsibilities
//! - Plain-text entities with an explicit content type
//! - Security response headers (optional)

use axum::http::{header, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::body::Entity;

/// Content type of every plain-text reply.
pub const TEXT_PLAIN_UTF_8: &str = "text/plain; charset=utf-8";

/// A text entity with its content type set explicitly.
pub fn text_entity(body: &'static str) -> Entity<&'static str> {
    Entity::new(body).with_header(
        header::CONTENT_TYPE,
        HeaderValue::from_static(TEXT_PLAIN_UTF_8),
    )
}

/// Layer adding `X-Content-Type-Options: nosniff` unless a handler set it.
pub fn nosniff_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    )
}
