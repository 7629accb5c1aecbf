// src/server/mod.rs
//! Skillet HTTP server
//!
//! This module provides the web server for the public recipe pages:
//! - Home listing of published recipes
//! - Per-category listings
//! - Single-recipe detail pages
//! - Title search
//!
//! Records are created out-of-band (CLI, tests, the model layer); every HTTP
//! request is an independent read-only query.

pub mod config;
mod handlers;
mod routes;

pub use config::SkilletConfig;
pub use routes::create_router;

use crate::db;
use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Path to the recipe database
    pub db_path: PathBuf,
    /// Site title shown in page chrome
    pub site_title: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".parse().unwrap(),
            db_path: PathBuf::from("skillet.db"),
            site_title: "Skillet".to_string(),
        }
    }
}

/// Shared server state
///
/// Holds only immutable configuration. Each request opens its own SQLite
/// connection, so no locking is needed.
pub struct ServerState {
    pub config: ServerConfig,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}

/// Start the Skillet server
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting {} on {}", config.site_title, config.bind_addr);
    tracing::info!("Database: {:?}", config.db_path);

    // First run creates the database; migrations are idempotent.
    db::init(&config.db_path)?;

    let bind_addr = config.bind_addr;
    let state = Arc::new(ServerState::new(config));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Ready to serve");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Resolve on SIGINT or SIGTERM so axum can drain in-flight requests.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        tracing::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
