// tests/common/mod.rs

//! Shared helpers for integration tests: a scratch database plus fixture
//! builders standing in for the administrative surface.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use skillet::db::{
    self,
    models::{Category, Recipe},
};
use skillet::server::{ServerConfig, ServerState, create_router};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// One test site: a router wired to its own scratch database.
pub struct TestSite {
    pub app: Router,
    pub db_path: PathBuf,
    _dir: TempDir,
}

pub fn setup() -> TestSite {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("skillet.db");
    db::init(&db_path).unwrap();

    let config = ServerConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: db_path.clone(),
        site_title: "Skillet".to_string(),
    };
    let app = create_router(Arc::new(ServerState::new(config)));

    TestSite {
        app,
        db_path,
        _dir: dir,
    }
}

pub fn make_category(db_path: &Path, name: &str) -> i64 {
    let conn = db::open(db_path).unwrap();
    Category::new(name.to_string()).insert(&conn).unwrap()
}

/// Insert a recipe with the defaults the view tests rely on; callers adjust
/// the published flag and category.
pub fn make_recipe(db_path: &Path, title: &str, category_id: Option<i64>, published: bool) -> i64 {
    let conn = db::open(db_path).unwrap();
    let mut recipe = Recipe::new(
        title.to_string(),
        10,
        "Minutos".to_string(),
        5,
        "Porções".to_string(),
    );
    recipe.description = "Recipe description".to_string();
    recipe.preparation_steps = "Mix everything.\nServe.".to_string();
    recipe.category_id = category_id;
    recipe.is_published = published;
    recipe.insert(&conn).unwrap()
}

/// Issue one GET request against the site and decode the body.
pub async fn get(site: &TestSite, path: &str) -> (StatusCode, String) {
    let response = site
        .app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
