// src/db/models/recipe.rs

//! Recipe model and the public visibility filter
//!
//! A recipe is visible to the public pages iff `is_published` is true. All
//! `*_published` queries below enforce that rule in SQL; handlers never see
//! unpublished rows and therefore cannot leak their existence.

use crate::error::Result;
use rusqlite::{Connection, OptionalExtension, Row, params};

const RECIPE_COLUMNS: &str = "id, title, description, preparation_time, preparation_time_unit, \
     servings, servings_unit, preparation_steps, is_published, category_id, created_at";

/// A recipe record. Rows are created and mutated by the administrative
/// surface (CLI, tests); the HTTP handlers only read.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub preparation_time: i64,
    pub preparation_time_unit: String,
    pub servings: i64,
    pub servings_unit: String,
    pub preparation_steps: String,
    pub is_published: bool,
    pub category_id: Option<i64>,
    pub created_at: Option<String>,
}

impl Recipe {
    /// Create a new Recipe. New recipes start unpublished.
    pub fn new(
        title: String,
        preparation_time: i64,
        preparation_time_unit: String,
        servings: i64,
        servings_unit: String,
    ) -> Self {
        Self {
            id: None,
            title,
            description: String::new(),
            preparation_time,
            preparation_time_unit,
            servings,
            servings_unit,
            preparation_steps: String::new(),
            is_published: false,
            category_id: None,
            created_at: None,
        }
    }

    /// Insert this recipe into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO recipes
             (title, description, preparation_time, preparation_time_unit,
              servings, servings_unit, preparation_steps, is_published, category_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                &self.title,
                &self.description,
                &self.preparation_time,
                &self.preparation_time_unit,
                &self.servings,
                &self.servings_unit,
                &self.preparation_steps,
                self.is_published as i32,
                &self.category_id,
            ],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Find a recipe by ID regardless of publication state.
    ///
    /// Administrative lookup; public pages must use [`Recipe::find_published`].
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = ?1"
        ))?;

        let recipe = stmt.query_row([id], Self::from_row).optional()?;

        Ok(recipe)
    }

    /// Find the published recipe with the given ID.
    ///
    /// Returns `None` for unpublished and nonexistent ids alike.
    pub fn find_published(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = ?1 AND is_published = 1"
        ))?;

        let recipe = stmt.query_row([id], Self::from_row).optional()?;

        Ok(recipe)
    }

    /// List published recipes, newest first, optionally restricted to one
    /// category. An empty result is valid, not an error.
    pub fn list_published(conn: &Connection, category_id: Option<i64>) -> Result<Vec<Self>> {
        match category_id {
            Some(category_id) => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {RECIPE_COLUMNS} FROM recipes
                     WHERE is_published = 1 AND category_id = ?1
                     ORDER BY id DESC"
                ))?;
                let recipes = stmt
                    .query_map([category_id], Self::from_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(recipes)
            }
            None => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {RECIPE_COLUMNS} FROM recipes
                     WHERE is_published = 1
                     ORDER BY id DESC"
                ))?;
                let recipes = stmt
                    .query_map([], Self::from_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(recipes)
            }
        }
    }

    /// Search published recipes whose title contains `query`,
    /// case-insensitively, newest first.
    pub fn search_published(conn: &Connection, query: &str) -> Result<Vec<Self>> {
        let pattern = format!("%{}%", like_escape(query));
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes
             WHERE is_published = 1 AND title LIKE ?1 ESCAPE '\\'
             ORDER BY id DESC"
        ))?;

        let recipes = stmt
            .query_map([&pattern], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// Convert a database row to a Recipe
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            title: row.get(1)?,
            description: row.get(2)?,
            preparation_time: row.get(3)?,
            preparation_time_unit: row.get(4)?,
            servings: row.get(5)?,
            servings_unit: row.get(6)?,
            preparation_steps: row.get(7)?,
            is_published: row.get::<_, i32>(8)? != 0,
            category_id: row.get(9)?,
            created_at: row.get(10)?,
        })
    }
}

/// Escape LIKE metacharacters so user input matches literally.
fn like_escape(query: &str) -> String {
    query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
