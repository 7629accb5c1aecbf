// src/main.rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use skillet::db::{
    self,
    models::{Category, Recipe},
};
use skillet::server::{self, SkilletConfig};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "skillet")]
#[command(author, version, about = "Self-hosted recipe publishing site with server-rendered pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the recipe database
    Init {
        /// Database path
        #[arg(short, long, default_value = "skillet.db")]
        db_path: String,
    },
    /// Insert sample categories and recipes for local development
    Seed {
        /// Database path
        #[arg(short, long, default_value = "skillet.db")]
        db_path: String,
    },
    /// Run the HTTP server
    Serve {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Bind address (overrides the config file)
        #[arg(long)]
        bind: Option<String>,
        /// Database path (overrides the config file)
        #[arg(short, long)]
        db_path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { db_path }) => {
            info!("Initializing recipe database at: {}", db_path);
            db::init(&db_path)?;
            println!("Database initialized successfully at: {}", db_path);
            Ok(())
        }
        Some(Commands::Seed { db_path }) => {
            info!("Seeding sample data into: {}", db_path);
            db::init(&db_path)?;

            let mut conn = db::open(&db_path)?;
            seed(&mut conn)?;

            let categories = Category::list_all(&conn)?;
            let published = Recipe::list_published(&conn, None)?;
            println!("Seeded sample data into: {}", db_path);
            println!("  Categories: {}", categories.len());
            println!("  Published recipes: {}", published.len());
            Ok(())
        }
        Some(Commands::Serve {
            config,
            bind,
            db_path,
        }) => {
            let file_config = match &config {
                Some(path) => SkilletConfig::load(path)?,
                None => SkilletConfig::default(),
            };
            let mut server_config = file_config.to_server_config()?;

            if let Some(bind) = bind {
                server_config.bind_addr = bind
                    .parse()
                    .with_context(|| format!("Invalid bind address: {bind}"))?;
            }
            if let Some(db_path) = db_path {
                server_config.db_path = db_path;
            }

            server::run_server(server_config).await
        }
        None => {
            // No command provided, show help
            println!("Skillet v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'skillet --help' for usage information");
            Ok(())
        }
    }
}

/// Sample content so a fresh checkout has something to render.
fn seed(conn: &mut rusqlite::Connection) -> skillet::Result<()> {
    db::transaction(conn, |tx| {
        let breakfast = Category::new("Breakfast".to_string()).insert(tx)?;
        let soups = Category::new("Soups".to_string()).insert(tx)?;
        let desserts = Category::new("Desserts".to_string()).insert(tx)?;

        let mut pancakes = Recipe::new(
            "Banana Pancakes".to_string(),
            20,
            "Minutes".to_string(),
            4,
            "Servings".to_string(),
        );
        pancakes.description = "Fluffy pancakes sweetened with ripe bananas.".to_string();
        pancakes.preparation_steps = "Mash the bananas in a large bowl.\n\
             Whisk in the eggs, flour and milk.\n\
             Cook spoonfuls on a buttered skillet until golden on both sides."
            .to_string();
        pancakes.category_id = Some(breakfast);
        pancakes.is_published = true;
        pancakes.insert(tx)?;

        let mut soup = Recipe::new(
            "Roasted Tomato Soup".to_string(),
            50,
            "Minutes".to_string(),
            6,
            "Servings".to_string(),
        );
        soup.description = "Slow-roasted tomatoes blended with garlic and basil.".to_string();
        soup.preparation_steps = "Roast the tomatoes and garlic until caramelized.\n\
             Blend with stock and basil, then simmer for ten minutes."
            .to_string();
        soup.category_id = Some(soups);
        soup.is_published = true;
        soup.insert(tx)?;

        // Draft: stays invisible on the site until it is published
        let mut flan = Recipe::new(
            "Caramel Flan".to_string(),
            90,
            "Minutes".to_string(),
            8,
            "Servings".to_string(),
        );
        flan.category_id = Some(desserts);
        flan.insert(tx)?;

        Ok(())
    })
}
