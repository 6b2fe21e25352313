use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use article_store::articles::Articles;
use article_store::persist::SqliteArticles;
use article_store::server;
use article_store::settings::Settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load()?;
    let db = if settings.database.path == ":memory:" {
        Connection::open_in_memory()?
    } else {
        Connection::open(&settings.database.path)?
    };
    info!(path = %settings.database.path, "article store opened");
    let store: Box<dyn Articles> = Box::new(SqliteArticles::new(db));
    let app = server::router(Arc::new(Mutex::new(store)));

    let listener = TcpListener::bind(&settings.server.listen).await?;
    info!(listen = %settings.server.listen, "serving articles");
    axum::serve(listener, app).await?;
    Ok(())
}
