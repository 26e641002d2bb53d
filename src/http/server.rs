//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit, metrics)
//! - Bind server to listener
//! - Stop accepting on shutdown and drain in-flight requests

use std::time::Duration;

use axum::{
    extract::{DefaultBodyLimit, FromRef},
    http::StatusCode,
    middleware, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::body::BodyLimit;
use crate::config::AppConfig;
use crate::handlers;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::http::response::nosniff_layer;
use crate::lifecycle::shutdown;
use crate::observability::{metrics, tracing::request_span};

/// Application state injected into handlers.
///
/// Immutable; cloned into every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub body_limit: BodyLimit,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            body_limit: BodyLimit(config.limits.max_body_size),
        }
    }
}

impl FromRef<AppState> for BodyLimit {
    fn from_ref(state: &AppState) -> Self {
        state.body_limit
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(config: &AppConfig) -> Router {
    let router = handlers::routes()
        .route_layer(middleware::from_fn(metrics::track_metrics))
        .with_state(AppState::new(config))
        .layer(DefaultBodyLimit::max(config.limits.max_body_size))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.timeouts.request_secs),
        ))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(set_request_id_layer());

    if config.security.enable_headers {
        router.layer(nosniff_layer())
    } else {
        router
    }
}

/// HTTP server for the body echo endpoints.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let router = build_router(&config);
        Self { router, config }
    }

    /// Run the server until `shutdown_rx` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            max_body_size = self.config.limits.max_body_size,
            request_timeout_secs = self.config.timeouts.request_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait_for(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
