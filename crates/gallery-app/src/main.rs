//! # Gallery
//!
//! Process entry point: configuration, logging and dependency wiring.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs  - config, tracing, signal handling                    │
//! │    │                                                            │
//! │    └── compose.rs  - backend selection & DI                     │
//! │          ├── MySqlBackend (adapter), when enabled and reachable │
//! │          └── InMemory*Repository (adapter), otherwise           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod compose;
mod config;

use clap::Parser;
use gallery_adapter::{MySqlBackend, MySqlSettings, ReadinessPolicy};
use tracing::{info, info_span, Instrument};
use tracing_subscriber::EnvFilter;

use crate::compose::compose;
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let span = info_span!("gallery", env = %config.env);
    run(config).instrument(span).await
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    // ========================================
    // Dependency Injection - Wire up the system
    // ========================================

    let settings = MySqlSettings::from(&config.database);
    let services = compose(
        &config.database,
        Some(MySqlBackend::connect(&settings, &ReadinessPolicy::default())),
    )
    .await;

    let items = services.item_count().await;
    info!(
        backend = services.backend_name(),
        items = ?items,
        "services ready"
    );

    // ========================================
    // Run until told to stop
    // ========================================

    let signal = shutdown_signal().await;
    info!("shutdown requested");
    services.shutdown().await;
    info!("stopped");
    Ok(signal?)
}

async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            res = tokio::signal::ctrl_c() => res,
            _ = terminate.recv() => Ok(()),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}
