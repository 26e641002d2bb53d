//! Emits one event at every log level.

pub async fn log_test() -> &'static str {
    let name = "Spring";

    tracing::trace!("trace log = {}", name);
    tracing::debug!("debug log = {}", name);
    tracing::info!("info log = {}", name);
    tracing::warn!("warn log = {}", name);
    tracing::error!("error log = {}", name);

    "ok"
}
