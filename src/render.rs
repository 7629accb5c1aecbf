// src/render.rs

//! HTML rendering for the public pages
//!
//! Handlers build typed view models from database rows and pass them to the
//! page functions below; there are no dynamic template contexts. All dynamic
//! content is HTML-escaped by maud.

use crate::db::models::{Category, Recipe};
use chrono::NaiveDateTime;
use maud::{DOCTYPE, Markup, html};

/// Link target for a category page.
#[derive(Debug, Clone)]
pub struct CategoryLink {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryLink {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.unwrap_or_default(),
            name: category.name,
        }
    }
}

/// One recipe card on a listing page.
#[derive(Debug, Clone)]
pub struct RecipeSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub preparation_time: i64,
    pub preparation_time_unit: String,
    pub servings: i64,
    pub servings_unit: String,
}

impl From<Recipe> for RecipeSummary {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id.unwrap_or_default(),
            title: recipe.title,
            description: recipe.description,
            preparation_time: recipe.preparation_time,
            preparation_time_unit: recipe.preparation_time_unit,
            servings: recipe.servings,
            servings_unit: recipe.servings_unit,
        }
    }
}

/// Everything the detail page shows for one recipe.
#[derive(Debug, Clone)]
pub struct RecipeDetail {
    pub title: String,
    pub description: String,
    pub preparation_time: i64,
    pub preparation_time_unit: String,
    pub servings: i64,
    pub servings_unit: String,
    pub preparation_steps: String,
    pub category: Option<CategoryLink>,
    pub published_on: Option<String>,
}

impl RecipeDetail {
    pub fn from_parts(recipe: Recipe, category: Option<Category>) -> Self {
        let published_on = recipe.created_at.as_deref().and_then(format_date);
        Self {
            title: recipe.title,
            description: recipe.description,
            preparation_time: recipe.preparation_time,
            preparation_time_unit: recipe.preparation_time_unit,
            servings: recipe.servings,
            servings_unit: recipe.servings_unit,
            preparation_steps: recipe.preparation_steps,
            category: category.map(CategoryLink::from),
            published_on,
        }
    }
}

pub struct HomeView {
    pub site_title: String,
    pub recipes: Vec<RecipeSummary>,
}

pub struct CategoryView {
    pub site_title: String,
    pub category: CategoryLink,
    pub recipes: Vec<RecipeSummary>,
}

pub struct DetailView {
    pub site_title: String,
    pub recipe: RecipeDetail,
}

pub struct SearchView {
    pub site_title: String,
    pub query: String,
    pub recipes: Vec<RecipeSummary>,
}

/// Format a SQLite `CURRENT_TIMESTAMP` value for display.
fn format_date(timestamp: &str) -> Option<String> {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.format("%B %-d, %Y").to_string())
}

/// Shared page chrome: header with site title and search form, main content,
/// footer.
fn layout(site_title: &str, page_title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page_title) " | " (site_title) }
            }
            body {
                header class="site-header" {
                    p class="site-title" { a href="/" { (site_title) } }
                    form class="search-form" action="/recipes/search" method="get" {
                        input type="search" name="q" placeholder="Search recipes";
                        button type="submit" { "Search" }
                    }
                }
                main { (content) }
                footer { p { (site_title) } }
            }
        }
    }
}

fn recipe_list(recipes: &[RecipeSummary]) -> Markup {
    html! {
        div class="recipe-list" {
            @for recipe in recipes {
                article class="recipe" {
                    h2 { a href={ "/recipes/" (recipe.id) } { (recipe.title) } }
                    @if !recipe.description.is_empty() {
                        p class="description" { (recipe.description) }
                    }
                    ul class="recipe-meta" {
                        li { (recipe.preparation_time) " " (recipe.preparation_time_unit) }
                        li { (recipe.servings) " " (recipe.servings_unit) }
                    }
                }
            }
        }
    }
}

pub fn home_page(view: &HomeView) -> Markup {
    let content = if view.recipes.is_empty() {
        html! {
            h1 { "No recipes have been published yet" }
        }
    } else {
        recipe_list(&view.recipes)
    };

    layout(&view.site_title, "Home", content)
}

pub fn category_page(view: &CategoryView) -> Markup {
    let content = html! {
        h1 class="category-title" { (view.category.name) }
        (recipe_list(&view.recipes))
    };

    layout(&view.site_title, &view.category.name, content)
}

pub fn detail_page(view: &DetailView) -> Markup {
    let recipe = &view.recipe;
    let content = html! {
        article class="recipe recipe-detail" {
            h1 { (recipe.title) }
            ul class="recipe-meta" {
                @if let Some(category) = &recipe.category {
                    li {
                        a href={ "/recipes/category/" (category.id) } { (category.name) }
                    }
                }
                li { (recipe.preparation_time) " " (recipe.preparation_time_unit) }
                li { (recipe.servings) " " (recipe.servings_unit) }
                @if let Some(published_on) = &recipe.published_on {
                    li { "Published " (published_on) }
                }
            }
            @if !recipe.description.is_empty() {
                p class="description" { (recipe.description) }
            }
            @if !recipe.preparation_steps.is_empty() {
                section class="preparation-steps" {
                    h2 { "Preparation" }
                    @for line in recipe.preparation_steps.lines() {
                        @if !line.trim().is_empty() {
                            p { (line) }
                        }
                    }
                }
            }
        }
    };

    layout(&view.site_title, &recipe.title, content)
}

pub fn search_page(view: &SearchView) -> Markup {
    let content = html! {
        section class="search" {
            h1 { "Search recipes" }
            form class="search-form" action="/recipes/search" method="get" {
                input type="search" name="q" value=(view.query) placeholder="Search recipes";
                button type="submit" { "Search" }
            }
            @if !view.query.is_empty() {
                p class="search-summary" { "Results for \"" (view.query) "\"" }
            }
            @if view.recipes.is_empty() {
                p class="no-results" { "No recipes matched your search" }
            } @else {
                (recipe_list(&view.recipes))
            }
        }
    };

    layout(&view.site_title, "Search", content)
}

pub fn not_found_page(site_title: &str) -> Markup {
    let content = html! {
        section class="not-found" {
            h1 { "404" }
            p { "The page you are looking for was not found." }
            p { a href="/" { "Back to all recipes" } }
        }
    };

    layout(site_title, "Not found", content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(title: &str) -> RecipeSummary {
        RecipeSummary {
            id: 1,
            title: title.to_string(),
            description: "A short description".to_string(),
            preparation_time: 10,
            preparation_time_unit: "Minutos".to_string(),
            servings: 5,
            servings_unit: "Porções".to_string(),
        }
    }

    #[test]
    fn test_home_page_empty_state() {
        let view = HomeView {
            site_title: "Skillet".to_string(),
            recipes: Vec::new(),
        };

        let html = home_page(&view).into_string();
        assert!(html.contains("<h1>No recipes have been published yet</h1>"));
    }

    #[test]
    fn test_home_page_renders_cards() {
        let view = HomeView {
            site_title: "Skillet".to_string(),
            recipes: vec![summary("Recipe Title")],
        };

        let html = home_page(&view).into_string();
        assert!(html.contains("Recipe Title"));
        assert!(html.contains("10 Minutos"));
        assert!(html.contains("5 Porções"));
        assert!(html.contains("href=\"/recipes/1\""));
    }

    #[test]
    fn test_detail_page_escapes_markup_in_titles() {
        let view = DetailView {
            site_title: "Skillet".to_string(),
            recipe: RecipeDetail {
                title: "<script>alert('pwn')</script>".to_string(),
                description: String::new(),
                preparation_time: 10,
                preparation_time_unit: "Minutes".to_string(),
                servings: 2,
                servings_unit: "Servings".to_string(),
                preparation_steps: String::new(),
                category: None,
                published_on: None,
            },
        };

        let html = detail_page(&view).into_string();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_search_page_echoes_query() {
        let view = SearchView {
            site_title: "Skillet".to_string(),
            query: "cheese".to_string(),
            recipes: Vec::new(),
        };

        let html = search_page(&view).into_string();
        assert!(html.contains("Results for \"cheese\""));
        assert!(html.contains("No recipes matched your search"));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date("2026-08-07 12:30:00").as_deref(),
            Some("August 7, 2026")
        );
        assert!(format_date("not a timestamp").is_none());
    }
}
