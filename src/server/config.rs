// src/server/config.rs
//! Configuration file parsing for the Skillet server
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address
//! - [database] - SQLite file path
//! - [site] - Presentation settings

use crate::server::ServerConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// TOML configuration file structure
#[derive(Debug, Deserialize)]
pub struct SkilletConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSection,

    /// Database settings
    #[serde(default)]
    pub database: DatabaseSection,

    /// Site presentation settings
    #[serde(default)]
    pub site: SiteSection,
}

impl Default for SkilletConfig {
    fn default() -> Self {
        Self {
            server: ServerSection::default(),
            database: DatabaseSection::default(),
            site: SiteSection::default(),
        }
    }
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// Public bind address
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

/// Database configuration section
#[derive(Debug, Deserialize)]
pub struct DatabaseSection {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("skillet.db")
}

/// Site presentation section
#[derive(Debug, Deserialize)]
pub struct SiteSection {
    /// Title shown in the page header and <title> tags
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

fn default_title() -> String {
    "Skillet".to_string()
}

impl SkilletConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: SkilletConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))?;

        if self.database.path.as_os_str().is_empty() {
            anyhow::bail!("database.path must not be empty");
        }

        if self.site.title.trim().is_empty() {
            anyhow::bail!("site.title must not be empty");
        }

        Ok(())
    }

    /// Convert to the internal ServerConfig structure
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        let bind_addr = self.server.bind.parse()?;

        Ok(ServerConfig {
            bind_addr,
            db_path: self.database.path.clone(),
            site_title: self.site.title.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SkilletConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.site.title, "Skillet");
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[server]
bind = "127.0.0.1:3000"

[database]
path = "/var/lib/skillet/recipes.db"

[site]
title = "Nossa Cozinha"
"#;
        let config: SkilletConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_ok());

        let server_config = config.to_server_config().unwrap();
        assert_eq!(server_config.bind_addr.port(), 3000);
        assert_eq!(
            server_config.db_path,
            PathBuf::from("/var/lib/skillet/recipes.db")
        );
        assert_eq!(server_config.site_title, "Nossa Cozinha");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: SkilletConfig = toml::from_str("[site]\ntitle = \"Recipes\"\n").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.database.path, PathBuf::from("skillet.db"));
    }

    #[test]
    fn test_invalid_bind_address() {
        let config: SkilletConfig = toml::from_str("[server]\nbind = \"not-an-address\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let config: SkilletConfig = toml::from_str("[site]\ntitle = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }
}
