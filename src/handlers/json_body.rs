//! JSON request bodies decoded into a [`PersonRecord`].
//!
//! v1 and v2 decode by hand from text; v3 to v5 let an extractor do it.

use axum::{
    extract::{Request, State},
    Json,
};

use crate::body::{read_to_string, BodyError, Entity, PersonRecord};
use crate::http::AppState;

fn log_record(record: &PersonRecord) {
    tracing::info!(
        username = %record.username,
        age = record.age,
        "Decoded person record"
    );
}

/// Reads and decodes by hand. Writes no response body.
pub async fn request_body_json_v1(
    State(state): State<AppState>,
    request: Request,
) -> Result<(), BodyError> {
    let message_body = read_to_string(request.into_body(), state.body_limit.0).await?;
    tracing::info!(message_body = %message_body, "Read request body");

    let record = PersonRecord::from_json(&message_body)?;
    log_record(&record);
    Ok(())
}

/// Binds the body as text, then decodes by hand.
pub async fn request_body_json_v2(message_body: String) -> Result<&'static str, BodyError> {
    tracing::info!(message_body = %message_body, "Read request body");

    let record = PersonRecord::from_json(&message_body)?;
    log_record(&record);
    Ok("OK")
}

/// Binds the body straight to a record. Requires `application/json`.
pub async fn request_body_json_v3(Json(record): Json<PersonRecord>) -> &'static str {
    log_record(&record);
    "OK"
}

/// Binds headers and decoded record together.
pub async fn request_body_json_v4(entity: Entity<PersonRecord>) -> &'static str {
    let record = entity.into_body();
    log_record(&record);
    "OK"
}

/// Binds the record and echoes it back as JSON.
pub async fn request_body_json_v5(Json(record): Json<PersonRecord>) -> Json<PersonRecord> {
    log_record(&record);
    Json(record)
}
