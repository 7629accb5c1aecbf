// src/server/handlers/recipes.rs
//! Public recipe pages: home listing, category listing, recipe detail

use super::{respond, with_db};
use crate::db::models::{Category, Recipe};
use crate::error::Error;
use crate::render::{
    self, CategoryLink, CategoryView, DetailView, HomeView, RecipeDetail, RecipeSummary,
};
use crate::server::ServerState;
use axum::extract::{Path, State};
use axum::response::Response;
use std::sync::Arc;

/// GET /
///
/// Lists every published recipe, newest first. An empty collection is not an
/// error; the page renders an empty-state heading instead.
pub async fn home(State(state): State<Arc<ServerState>>) -> Response {
    let result = with_db(&state, |conn| {
        let recipes = Recipe::list_published(conn, None)?;
        Ok(render::home_page(&HomeView {
            site_title: state.config.site_title.clone(),
            recipes: recipes.into_iter().map(RecipeSummary::from).collect(),
        }))
    });
    respond(&state, result)
}

/// GET /recipes/category/:category_id
///
/// 404 when the category does not exist or has no published recipes; the two
/// cases are indistinguishable in the response.
pub async fn category(
    State(state): State<Arc<ServerState>>,
    Path(category_id): Path<i64>,
) -> Response {
    let result = with_db(&state, |conn| {
        let category = Category::find_by_id(conn, category_id)?
            .ok_or_else(|| Error::NotFound(format!("category {category_id}")))?;

        let recipes = Recipe::list_published(conn, Some(category_id))?;
        if recipes.is_empty() {
            return Err(Error::NotFound(format!(
                "published recipes in category {category_id}"
            )));
        }

        Ok(render::category_page(&CategoryView {
            site_title: state.config.site_title.clone(),
            category: CategoryLink::from(category),
            recipes: recipes.into_iter().map(RecipeSummary::from).collect(),
        }))
    });
    respond(&state, result)
}

/// GET /recipes/:id
///
/// 200 iff the id resolves to a published recipe; 404 otherwise, whether the
/// row is missing or merely unpublished.
pub async fn detail(State(state): State<Arc<ServerState>>, Path(id): Path<i64>) -> Response {
    let result = with_db(&state, |conn| {
        let recipe = Recipe::find_published(conn, id)?
            .ok_or_else(|| Error::NotFound(format!("recipe {id}")))?;

        let category = match recipe.category_id {
            Some(category_id) => Category::find_by_id(conn, category_id)?,
            None => None,
        };

        Ok(render::detail_page(&DetailView {
            site_title: state.config.site_title.clone(),
            recipe: RecipeDetail::from_parts(recipe, category),
        }))
    });
    respond(&state, result)
}
