//! body-echo server.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                  BODY ECHO                   │
//!                        │                                              │
//!     Client Request     │  ┌──────────┐   ┌──────────┐   ┌──────────┐  │
//!     ───────────────────┼─▶│  http    │──▶│ handlers │──▶│   body   │  │
//!                        │  │  server  │   │ (routes) │   │ read/    │  │
//!                        │  └──────────┘   └────┬─────┘   │ decode   │  │
//!                        │                      │         └──────────┘  │
//!     Client Response    │                      ▼                       │
//!     ◀──────────────────┼──── "OK" / JSON echo / nothing               │
//!                        │                                              │
//!                        │  config · observability · lifecycle          │
//!                        └──────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use body_echo::config::{load_config, validation::validate_config, AppConfig, ConfigError};
use body_echo::lifecycle::{signals, Shutdown};
use body_echo::observability::{logging, metrics};
use body_echo::HttpServer;

#[derive(Parser, Debug)]
#[command(name = "body-echo")]
#[command(about = "Echoes HTTP request bodies back in several styles", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind to (e.g., 127.0.0.1:8080)
    #[arg(short, long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn resolve_config(cli: Cli) -> Result<AppConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    // CLI flags win over the file
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(Cli::parse())?;

    logging::init(&config.observability);

    tracing::info!("body-echo v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_body_size = config.limits.max_body_size,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        shutdown.trigger();
    });

    HttpServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
