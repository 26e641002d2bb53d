//! Request body endpoints.
//!
//! Every endpoint does the same thing: read the body, maybe decode it into a
//! [`PersonRecord`](crate::body::PersonRecord), log, and reply. They differ
//! only in how the body reaches the handler.
//!
//! ```text
//! raw request   → *-v1          (collect stream from Request)
//! body stream   → string-v2     (Body extractor)
//! bound text    → string-v4, json-v2
//! bound record  → json-v3, json-v5 (Json extractor)
//! whole entity  → string-v3, json-v4 (Entity extractor)
//! ```

pub mod json_body;
pub mod log_test;
pub mod string_body;

use axum::{
    routing::{any, post},
    Router,
};

use crate::http::AppState;

/// Routing table for every endpoint.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/request-body-string-v1", post(string_body::request_body_string_v1))
        .route("/request-body-string-v2", post(string_body::request_body_string_v2))
        .route("/request-body-string-v3", post(string_body::request_body_string_v3))
        .route("/request-body-string-v4", post(string_body::request_body_string_v4))
        .route("/request-body-json-v1", post(json_body::request_body_json_v1))
        .route("/request-body-json-v2", post(json_body::request_body_json_v2))
        .route("/request-body-json-v3", post(json_body::request_body_json_v3))
        .route("/request-body-json-v4", post(json_body::request_body_json_v4))
        .route("/request-body-json-v5", post(json_body::request_body_json_v5))
        .route("/log-test", any(log_test::log_test))
}
