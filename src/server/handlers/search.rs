// src/server/handlers/search.rs
//! Title search over published recipes

use super::{respond, with_db};
use crate::db::models::Recipe;
use crate::render::{self, RecipeSummary, SearchView};
use crate::server::ServerState;
use axum::extract::{Query, State};
use axum::response::Response;
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for search requests
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search term; an empty term matches every published recipe
    #[serde(default)]
    pub q: String,
}

/// GET /recipes/search?q=...
///
/// Always 200, whatever the query holds. Matching is a case-insensitive
/// substring test against the title, published recipes only.
pub async fn search(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let result = with_db(&state, |conn| {
        let recipes = Recipe::search_published(conn, &params.q)?;
        Ok(render::search_page(&SearchView {
            site_title: state.config.site_title.clone(),
            query: params.q.clone(),
            recipes: recipes.into_iter().map(RecipeSummary::from).collect(),
        }))
    });
    respond(&state, result)
}
