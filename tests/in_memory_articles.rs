use article_store::articles::{Articles, InMemoryArticles};
use article_store::error::ArticleError;
use article_store::model::{ArticleId, Term};
use article_store::vocab;

mod common;
use common::{create_article, create_named_article, create_typed_article};

#[test]
fn can_add_an_article() {
    let mut articles = InMemoryArticles::new();
    let id = ArticleId::mint();

    assert!(!articles.contains(&id).unwrap());

    articles.set(id.clone(), create_article(&id)).unwrap();

    assert!(articles.contains(&id).unwrap());
    assert_eq!(articles.count().unwrap(), 1);
}

#[test]
fn can_update_an_article() {
    let mut articles = InMemoryArticles::new();
    let id = ArticleId::mint();

    articles
        .set(id.clone(), create_named_article(&id, "Original"))
        .unwrap();
    articles
        .set(id.clone(), create_named_article(&id, "Updated"))
        .unwrap();

    let stored = articles.get(&id).unwrap();
    assert_eq!(
        stored.property(vocab::schema::NAME).unwrap().first(),
        Some(&Term::literal("Updated"))
    );
    assert_eq!(articles.count().unwrap(), 1);
}

#[test]
fn rejects_a_document_that_is_not_an_article() {
    let mut articles = InMemoryArticles::new();
    let id = ArticleId::mint();
    let article = create_typed_article(&id, "Article", &["http://schema.org/NewsArticle"]);

    match articles.set(id.clone(), article) {
        Err(ArticleError::NotAnArticle(types)) => {
            assert_eq!(types, vec!["http://schema.org/NewsArticle".to_owned()]);
        }
        other => panic!("expected NotAnArticle, got {other:?}"),
    }
    // a rejected document causes no storage mutation
    assert!(!articles.contains(&id).unwrap());
    assert_eq!(articles.count().unwrap(), 0);
}

#[test]
fn rejects_a_document_with_no_type() {
    let mut articles = InMemoryArticles::new();
    let id = ArticleId::mint();
    let article = create_typed_article(&id, "Article", &[]);

    match articles.set(id, article) {
        Err(ArticleError::NotAnArticle(types)) => assert!(types.is_empty()),
        other => panic!("expected NotAnArticle, got {other:?}"),
    }
}

#[test]
fn rejects_a_document_without_a_usable_name() {
    let mut articles = InMemoryArticles::new();
    let id = ArticleId::mint();

    let mut absent = create_article(&id);
    absent.properties.remove(vocab::schema::NAME);
    let mut empty = create_article(&id);
    empty
        .properties
        .insert(vocab::schema::NAME.to_owned(), Vec::new().into());
    let mut null = create_article(&id);
    null.properties.insert(
        vocab::schema::NAME.to_owned(),
        vec![Term::literal(serde_json::Value::Null)].into(),
    );

    for article in [absent, empty, null] {
        assert!(matches!(
            articles.set(id.clone(), article),
            Err(ArticleError::MissingName)
        ));
    }
    assert_eq!(articles.count().unwrap(), 0);
}

#[test]
fn can_retrieve_an_article() {
    let mut articles = InMemoryArticles::new();
    let id = ArticleId::mint();
    let article = create_article(&id);

    articles.set(id.clone(), article.clone()).unwrap();

    assert_eq!(articles.get(&id).unwrap(), article);
}

#[test]
fn fails_when_the_article_is_not_found() {
    let articles = InMemoryArticles::new();
    let id = ArticleId::mint();

    match articles.get(&id) {
        Err(ArticleError::NotFound(missing)) => assert_eq!(missing, id),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn can_remove_an_article() {
    let mut articles = InMemoryArticles::new();
    let id = ArticleId::mint();

    articles.set(id.clone(), create_article(&id)).unwrap();
    articles.remove(&id).unwrap();

    assert!(!articles.contains(&id).unwrap());
}

#[test]
fn removing_an_absent_article_does_nothing() {
    let mut articles = InMemoryArticles::new();
    let id = ArticleId::mint();

    articles.remove(&id).unwrap();

    articles.set(id.clone(), create_article(&id)).unwrap();
    articles.remove(&id).unwrap();
    articles.remove(&id).unwrap();

    assert!(!articles.contains(&id).unwrap());
}

#[test]
fn counts_distinct_articles() {
    let mut articles = InMemoryArticles::new();
    let id1 = ArticleId::mint();
    let id2 = ArticleId::mint();

    assert_eq!(articles.count().unwrap(), 0);

    articles.set(id1.clone(), create_article(&id1)).unwrap();
    articles.set(id2.clone(), create_article(&id2)).unwrap();
    articles.set(id2.clone(), create_article(&id2)).unwrap();

    assert_eq!(articles.count().unwrap(), 2);
}

#[test]
fn iterates_in_insertion_order() {
    let mut articles = InMemoryArticles::new();
    let id1 = ArticleId::new("1");
    let id2 = ArticleId::new("2");
    let id3 = ArticleId::new("3");

    articles.set(id1.clone(), create_article(&id1)).unwrap();
    articles.set(id3.clone(), create_article(&id3)).unwrap();
    articles.set(id2.clone(), create_article(&id2)).unwrap();

    let ids: Vec<ArticleId> = articles
        .iter()
        .unwrap()
        .map(|entry| entry.unwrap().0)
        .collect();
    assert_eq!(ids, vec![id1, id3, id2]);
}

#[test]
fn updating_keeps_the_iteration_position() {
    let mut articles = InMemoryArticles::new();
    let id1 = ArticleId::new("1");
    let id2 = ArticleId::new("2");
    let id3 = ArticleId::new("3");

    articles.set(id1.clone(), create_article(&id1)).unwrap();
    articles.set(id3.clone(), create_article(&id3)).unwrap();
    articles.set(id2.clone(), create_article(&id2)).unwrap();
    articles
        .set(id1.clone(), create_named_article(&id1, "Updated"))
        .unwrap();

    let ids: Vec<ArticleId> = articles
        .iter()
        .unwrap()
        .map(|entry| entry.unwrap().0)
        .collect();
    assert_eq!(ids, vec![id1, id3, id2]);
}

#[test]
fn iteration_is_restartable() {
    let mut articles = InMemoryArticles::new();
    let id = ArticleId::mint();
    articles.set(id.clone(), create_article(&id)).unwrap();

    assert_eq!(articles.iter().unwrap().count(), 1);
    assert_eq!(articles.iter().unwrap().count(), 1);
}
