//! One-time schema provisioning for the SQLite-backed store.
//!
//! The relational adaptor assumes its table already exists; run this once
//! against the configured database path before first serving.

use rusqlite::Connection;
use tracing::info;
use tracing_subscriber::EnvFilter;

use article_store::persist::SqliteArticles;
use article_store::settings::Settings;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load()?;
    let db = Connection::open(&settings.database.path)?;
    SqliteArticles::create_table(&db)?;
    info!(path = %settings.database.path, "article table ready");
    Ok(())
}
