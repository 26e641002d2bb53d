//! Request body echo service.
//!
//! Shows the different ways an axum handler can get at a request body
//! (raw stream, bound text, bound JSON, whole entity) and what each one
//! sends back.

pub mod body;
pub mod config;
pub mod handlers;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use body::PersonRecord;
pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
