// src/db/models/category.rs

//! Category model - grouping entity for recipes

use crate::error::Result;
use rusqlite::{Connection, OptionalExtension, Row, params};

/// A recipe category. One category has many recipes; recipes reference it
/// through their `category_id` column.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: Option<i64>,
    pub name: String,
    pub created_at: Option<String>,
}

impl Category {
    /// Create a new Category
    pub fn new(name: String) -> Self {
        Self {
            id: None,
            name,
            created_at: None,
        }
    }

    /// Insert this category into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO categories (name) VALUES (?1)",
            params![&self.name],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Find a category by ID
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt =
            conn.prepare("SELECT id, name, created_at FROM categories WHERE id = ?1")?;

        let category = stmt.query_row([id], Self::from_row).optional()?;

        Ok(category)
    }

    /// List all categories, alphabetically
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt =
            conn.prepare("SELECT id, name, created_at FROM categories ORDER BY name")?;

        let categories = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    /// Convert a database row to a Category
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            created_at: row.get(2)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        schema::migrate(&conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_and_find() {
        let conn = test_conn();

        let mut category = Category::new("Breakfast".to_string());
        let id = category.insert(&conn).unwrap();

        let found = Category::find_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(found.name, "Breakfast");
        assert!(found.created_at.is_some());
    }

    #[test]
    fn test_find_missing_returns_none() {
        let conn = test_conn();
        assert!(Category::find_by_id(&conn, 1000).unwrap().is_none());
    }

    #[test]
    fn test_list_all_is_alphabetical() {
        let conn = test_conn();

        for name in ["Soups", "Breakfast", "Desserts"] {
            Category::new(name.to_string()).insert(&conn).unwrap();
        }

        let names: Vec<String> = Category::list_all(&conn)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Breakfast", "Desserts", "Soups"]);
    }
}
