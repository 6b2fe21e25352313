use thiserror::Error;

use crate::model::ArticleId;
use crate::vocab;

#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("Article {0} could not be found")]
    NotFound(ArticleId),
    #[error("Article type must be {} ({} given)", vocab::schema::ARTICLE, given_types(.0))]
    NotAnArticle(Vec<String>),
    #[error("Article must have at least one {}", vocab::schema::NAME)]
    MissingName,
    #[error("Config error: {0}")]
    Config(String),
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Data corruption: {message}")]
    DataCorruption { message: String },
    #[error("Lock poisoned: {0}")]
    Lock(String),
}

pub type Result<T> = std::result::Result<T, ArticleError>;

fn given_types(types: &[String]) -> String {
    if types.is_empty() {
        "no type was".to_owned()
    } else {
        format!("'{}' was", types.join("', '"))
    }
}

// Helper conversions
impl From<rusqlite::Error> for ArticleError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Persistence(e.to_string())
    }
}

impl From<config::ConfigError> for ArticleError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}
