//! HTTP transport over the article storage contract.
//!
//! The adaptors are synchronous, so every storage round-trip runs on a
//! blocking thread behind the shared store mutex. The transport owns
//! identifier minting: creation requests must arrive without an `@id`, and
//! a fresh blank node is assigned before the document reaches storage.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{Method, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::articles::Articles;
use crate::error::ArticleError;
use crate::model::{ArticleDoc, ArticleId};
use crate::vocab;

/// The store as shared by every route handler.
pub type SharedArticles = Arc<Mutex<Box<dyn Articles>>>;

type ErrorResponse = (StatusCode, Json<Value>);

pub fn router(articles: SharedArticles) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);
    Router::new()
        .route("/", get(entry_point))
        .route("/articles", get(article_list).post(add_article))
        .route("/articles/:id", get(article).delete(remove_article))
        .layer(cors)
        .with_state(articles)
}

async fn entry_point() -> Json<Value> {
    Json(json!({
        "@context": "http://schema.org",
        "@id": "/",
        "@type": "http://schema.org/EntryPoint",
        "http://schema.org/name": [{ "@value": "Article Store" }],
        "http://www.w3.org/ns/hydra/core#collection": [{ "@id": "/articles" }],
    }))
}

async fn article_list(State(articles): State<SharedArticles>) -> Result<Json<Value>, ErrorResponse> {
    let (total, members) = with_store(articles, |store| {
        let total = store.count()?;
        let mut members = Vec::with_capacity(total);
        for entry in store.iter()? {
            let (_, article) = entry?;
            members.push(article);
        }
        Ok((total, members))
    })
    .await?;
    info!(total, "article list");
    Ok(Json(json!({
        "@id": "/articles",
        "@type": vocab::hydra::COLLECTION,
        (vocab::hydra::TOTAL_ITEMS): [{ "@value": total }],
        (vocab::hydra::MEMBER): members,
    })))
}

async fn add_article(
    State(articles): State<SharedArticles>,
    Json(mut article): Json<ArticleDoc>,
) -> Result<StatusCode, ErrorResponse> {
    if let Some(given) = &article.id {
        let message = format!("Article IDs must not be set ('{given}' was given)");
        warn!(%message, "article rejected");
        return Err((StatusCode::FORBIDDEN, Json(json!({ "error": message }))));
    }
    let id = ArticleId::mint();
    article.id = Some(id.clone());
    with_store(articles, move |store| store.set(id, article)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn article(
    State(articles): State<SharedArticles>,
    Path(id): Path<String>,
) -> Result<Json<ArticleDoc>, ErrorResponse> {
    let id = ArticleId::new(id);
    let article = with_store(articles, move |store| store.get(&id)).await?;
    Ok(Json(article))
}

async fn remove_article(
    State(articles): State<SharedArticles>,
    Path(id): Path<String>,
) -> Result<StatusCode, ErrorResponse> {
    let id = ArticleId::new(id);
    with_store(articles, move |store| store.remove(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Runs one storage operation on a blocking thread and maps its failure
/// into a status code and a JSON body.
async fn with_store<T, F>(articles: SharedArticles, operation: F) -> Result<T, ErrorResponse>
where
    T: Send + 'static,
    F: FnOnce(&mut dyn Articles) -> crate::error::Result<T> + Send + 'static,
{
    let outcome = tokio::task::spawn_blocking(move || {
        let mut guard = articles
            .lock()
            .map_err(|e| ArticleError::Lock(e.to_string()))?;
        operation(&mut **guard)
    })
    .await
    .map_err(|e| {
        warn!(error = %e, "Join error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Join error" })),
        )
    })?;
    outcome.map_err(|error| {
        let status = match &error {
            ArticleError::NotFound(_) => StatusCode::NOT_FOUND,
            ArticleError::NotAnArticle(_) | ArticleError::MissingName => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!(error = %error, code = %status.as_u16(), "storage error");
        (status, Json(json!({ "error": error.to_string() })))
    })
}
