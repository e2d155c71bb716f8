//! Startup orchestration.
//!
//! # Responsibilities
//! - Start the metrics exporter when enabled
//! - Build the dataset and HTTP server
//! - Bind the listener and serve until a shutdown signal arrives
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::catalog::Dataset;
use crate::config::CatalogConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;

/// Fatal errors raised while bringing the service up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid {field} '{value}'")]
    Address { field: &'static str, value: String },

    #[error("metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("listener: {0}")]
    Io(#[from] std::io::Error),

    #[error("server task: {0}")]
    Join(#[from] tokio::task::JoinError),
}

fn parse_addr(field: &'static str, value: &str) -> Result<SocketAddr, StartupError> {
    value.parse().map_err(|_| StartupError::Address {
        field,
        value: value.to_string(),
    })
}

/// Run the service until Ctrl+C or SIGTERM.
pub async fn run(config: CatalogConfig) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let addr = parse_addr(
            "observability.metrics_address",
            &config.observability.metrics_address,
        )?;
        metrics::init_metrics(addr)?;
    }

    let dataset = Dataset::reference();
    tracing::info!(records = dataset.len(), "Dataset loaded");

    let bind = parse_addr("listener.bind_address", &config.listener.bind_address)?;
    let listener = TcpListener::bind(bind).await?;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, dataset);
    let server_shutdown = shutdown.subscribe();

    let mut serve = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    tokio::select! {
        joined = &mut serve => return finish(joined),
        _ = signals::shutdown_signal() => shutdown.trigger(),
    }

    finish(serve.await)
}

fn finish(
    joined: Result<Result<(), std::io::Error>, tokio::task::JoinError>,
) -> Result<(), StartupError> {
    joined??;
    Ok(())
}
