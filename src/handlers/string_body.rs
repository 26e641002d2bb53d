//! Plain-text request bodies.
//!
//! Four ways of getting at the same UTF-8 text. Each logs the body and
//! answers `OK`.

use axum::{
    body::Body,
    extract::{Request, State},
};

use crate::body::{read_to_string, BodyError, Entity};
use crate::http::response::text_entity;
use crate::http::AppState;

/// Reads the body straight off the full request.
pub async fn request_body_string_v1(
    State(state): State<AppState>,
    request: Request,
) -> Result<&'static str, BodyError> {
    let message_body = read_to_string(request.into_body(), state.body_limit.0).await?;
    tracing::info!(message_body = %message_body, "Read request body");
    Ok("OK")
}

/// Takes only the body stream, never the request head.
pub async fn request_body_string_v2(
    State(state): State<AppState>,
    body: Body,
) -> Result<&'static str, BodyError> {
    let message_body = read_to_string(body, state.body_limit.0).await?;
    tracing::info!(message_body = %message_body, "Read request body");
    Ok("OK")
}

/// Receives headers and body as one entity, and answers with one.
pub async fn request_body_string_v3(entity: Entity<String>) -> Entity<&'static str> {
    tracing::info!(
        message_body = %entity.body,
        header_count = entity.headers.len(),
        "Read request entity"
    );
    text_entity("OK")
}

/// Binds the body as text.
pub async fn request_body_string_v4(message_body: String) -> &'static str {
    tracing::info!(message_body = %message_body, "Read request body");
    "OK"
}
