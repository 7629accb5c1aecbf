// src/server/handlers/mod.rs
//! HTTP request handlers for the Skillet server

pub mod recipes;
pub mod search;

use crate::db;
use crate::error::{Error, Result};
use crate::render;
use crate::server::ServerState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::Markup;
use rusqlite::Connection;
use tracing::{debug, error};

/// Open a database connection and run a read-only query closure against it.
pub(crate) fn with_db<T, F>(state: &ServerState, f: F) -> Result<T>
where
    F: FnOnce(&Connection) -> Result<T>,
{
    let conn = db::open(&state.config.db_path)?;
    f(&conn)
}

/// Map a handler result onto an HTTP response.
///
/// `NotFound` renders the 404 page; absent and unpublished content produce an
/// identical response. Any other error is a 500.
pub(crate) fn respond(state: &ServerState, result: Result<Markup>) -> Response {
    match result {
        Ok(markup) => markup.into_response(),
        Err(Error::NotFound(what)) => {
            debug!("Not found: {}", what);
            (
                StatusCode::NOT_FOUND,
                render::not_found_page(&state.config.site_title),
            )
                .into_response()
        }
        Err(e) => {
            error!("Request failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}
