#![allow(dead_code)]

use article_store::model::{ArticleDoc, ArticleId, Term};
use article_store::vocab;

/// A minimal valid article named "Article", as the HTTP layer would store it.
pub fn create_article(id: &ArticleId) -> ArticleDoc {
    create_named_article(id, "Article")
}

pub fn create_named_article(id: &ArticleId, name: &str) -> ArticleDoc {
    create_typed_article(id, name, &[vocab::schema::ARTICLE])
}

pub fn create_typed_article(id: &ArticleId, name: &str, types: &[&str]) -> ArticleDoc {
    let mut doc = ArticleDoc::default();
    doc.id = Some(id.clone());
    doc.types = types.iter().map(|ty| (*ty).to_owned()).collect();
    doc.properties.insert(
        vocab::schema::NAME.to_owned(),
        vec![Term::literal(name)].into(),
    );
    doc
}
