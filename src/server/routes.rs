// src/server/routes.rs
//! Axum router configuration for the Skillet server
//!
//! The route table is static: every public page is an explicit path mapped to
//! one handler function.

use crate::server::ServerState;
use crate::server::handlers::{recipes, search};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};

/// Create the main application router
pub fn create_router(state: Arc<ServerState>) -> Router {
    // CORS configuration - read-only site, GET from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Home listing
        .route("/", get(recipes::home))
        // Title search (registered before /recipes/:id so the static segment wins)
        .route("/recipes/search", get(search::search))
        // Category listing
        .route("/recipes/category/:category_id", get(recipes::category))
        // Recipe detail
        .route("/recipes/:id", get(recipes::detail))
        // Health check
        .route("/health", get(health_check))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
