use tracing_subscriber::{prelude::*, EnvFilter};

pub const DEFAULT_LOG_FILTER: &str = "holocron_server=info,tower_http=info,sqlx=warn";

/// `RUST_LOG` picks the filter, `LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let format_json = std::env::var("LOG_FORMAT").unwrap_or_default() == "json";

    let registry = tracing_subscriber::registry().with(filter);
    if format_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(event = "shutdown_signal_failed", signal = "CTRL_C", error = %err);
            std::future::pending::<()>().await;
        }
    };
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(
                    event = "shutdown_signal_failed",
                    signal = "SIGTERM",
                    error = %err
                );
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!(
        event = "shutdown_signal_received",
        "Shutdown signal received"
    );
}
