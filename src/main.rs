//! Computer catalog service.
//!
//! # Architecture Overview
//!
//! ```text
//! Client ──▶ request id ──▶ trace ──▶ timeout ──▶ metrics ──▶ handlers
//!                                                               │
//!                                          catalog::query ◀─────┘
//!                                          (filter / sort)
//!                                                │
//! Client ◀──────────── JSON array ◀──── Vec<&Computer> ◀── Arc<[Computer]>
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use computer_catalog::config::{self, CatalogConfig, LogFormat};
use computer_catalog::lifecycle::startup;
use computer_catalog::observability::logging;

#[derive(Parser, Debug)]
#[command(name = "computer-catalog")]
#[command(about = "Read-only HTTP listing of computer records", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long, env = "CATALOG_BIND")]
    bind: Option<String>,

    /// Override the log output format.
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

impl Cli {
    fn load(&self) -> Result<CatalogConfig, config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => config::load_config(path)?,
            None => CatalogConfig::default(),
        };
        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if let Some(format) = self.log_format {
            config.observability.log_format = format;
        }
        config::validation::validate_config(&config).map_err(config::ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("computer-catalog: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init_logging(&config.observability) {
        eprintln!("computer-catalog: logging: {e}");
        return ExitCode::FAILURE;
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "computer-catalog starting"
    );

    match startup::run(config).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Fatal startup error");
            ExitCode::FAILURE
        }
    }
}
