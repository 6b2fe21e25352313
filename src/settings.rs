//! Runtime settings for the binaries.
//!
//! Read from an optional `article_store.toml` in the working directory,
//! overridable through `ARTICLE_STORE__*` environment variables
//! (`ARTICLE_STORE__DATABASE__PATH`, `ARTICLE_STORE__SERVER__LISTEN`).
//! The library itself never reads settings; adaptors are handed an open
//! connection instead.

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Path to the SQLite database file, or `:memory:` for a throwaway store.
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Address the HTTP listener binds to.
    pub listen: String,
}

impl Settings {
    pub fn load() -> Result<Settings> {
        let settings = Config::builder()
            .set_default("database.path", "article_store.db")?
            .set_default("server.listen", "0.0.0.0:8080")?
            .add_source(File::with_name("article_store").required(false))
            .add_source(
                Environment::with_prefix("ARTICLE_STORE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
