//! touchd - Touch Control Server Daemon
//!
//! HTTP switch for the `DisableTouchInput` parameter, so touch input on the
//! device can be turned on and off remotely or from scripts.
//!
//! Usage:
//!   touchd [--host 0.0.0.0] [--port 5002] [--params-dir /data/params]
//!   touchd --config touchd.toml
//!   touchd --memory-store          # no disk access, for demos

mod config;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use touch_api::{create_router, AppState, ENDPOINTS};
use touch_core::{FileParamStore, MemoryParamStore, ParamStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Args, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "touchd=info,touch_api=info,touch_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_args(Args::parse())?;

    let store = open_store(&settings).await?;
    tracing::info!(store = store.name(), "Parameter store ready");

    let app = create_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind((settings.host.as_str(), settings.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", settings.host, settings.port))?;

    tracing::info!(
        "Starting Touch Control Server on {}:{}",
        settings.host,
        settings.port
    );
    log_endpoints(&settings);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Touch Control Server stopped");
    Ok(())
}

async fn open_store(settings: &Settings) -> anyhow::Result<Arc<dyn ParamStore>> {
    if settings.memory_store {
        tracing::warn!("Using in-memory parameter store; changes are not persisted");
        return Ok(Arc::new(MemoryParamStore::new()));
    }

    let store = FileParamStore::open(&settings.params_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to open parameter store at {}",
                settings.params_dir.display()
            )
        })?;
    tracing::info!("Parameter store root: {}", settings.params_dir.display());
    Ok(Arc::new(store))
}

fn log_endpoints(settings: &Settings) {
    let base = format!("http://{}:{}", settings.host, settings.port);

    tracing::info!("Endpoints:");
    for (method, path, description) in ENDPOINTS {
        tracing::info!("  {:<4} {}{} - {}", method, base, path, description);
    }

    let port = settings.port;
    tracing::info!("Example usage:");
    tracing::info!("  curl http://localhost:{}/touch/status", port);
    tracing::info!(
        "  curl -X POST http://localhost:{}/touch/set -H 'Content-Type: application/json' -d '{{\"disable\": true}}'",
        port
    );
    tracing::info!(
        "  curl -X POST http://localhost:{}/touch/set -H 'Content-Type: application/json' -d '{{\"enable\": true}}'",
        port
    );
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
