//! `mta-api` -- HTTP server flagging under-used MTA host groups.
//!
//! Loads `.env` (if present), builds the host inventory, and serves
//! `GET /mta-hosting-optimizer`. The threshold is read from the
//! environment on every request; see [`ServerConfig`] for server settings.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mta_api::config::ServerConfig;
use mta_api::router::build_app_router;
use mta_api::state::AppState;
use mta_core::classifier;
use mta_core::inventory::{InventorySource, SeedInventory};
use mta_core::threshold::EnvConfig;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mta_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => tracing::debug!("No .env file found, using process environment"),
        Err(e) => fail(format_args!("Failed to load .env file: {e}")),
    }

    // --- Configuration ---
    let config = ServerConfig::from_env()
        .unwrap_or_else(|e| fail(format_args!("Invalid server configuration: {e}")));
    tracing::info!(
        host = %config.host,
        port = config.port,
        threshold_key = %config.threshold_key,
        "Loaded server configuration",
    );

    // --- Inventory ---
    let inventory = SeedInventory::default()
        .fetch()
        .unwrap_or_else(|e| fail(format_args!("Failed to load host inventory: {e}")));
    for group in classifier::summarize(&inventory) {
        tracing::debug!(
            host_group = %group.host_group,
            active = group.active,
            total = group.total,
            "Loaded host group",
        );
    }
    tracing::info!(
        host_groups = inventory.len(),
        addresses = inventory.address_count(),
        "Host inventory loaded",
    );

    let host: IpAddr = config
        .host
        .parse()
        .unwrap_or_else(|e| fail(format_args!("Invalid HOST '{}': {e}", config.host)));
    let addr = SocketAddr::new(host, config.port);

    // --- Router ---
    let state = AppState::new(inventory, config, Arc::new(EnvConfig));
    let app = build_app_router(state);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| fail(format_args!("Failed to bind to {addr}: {e}")));

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        fail(format_args!("Server error: {e}"));
    }

    tracing::info!("Graceful shutdown complete");
}

/// Log a startup failure and exit non-zero.
fn fail(message: std::fmt::Arguments<'_>) -> ! {
    tracing::error!("{message}");
    std::process::exit(1);
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
