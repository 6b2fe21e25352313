//! Article Store – a JSON-LD article store with pluggable persistence.
//!
//! Articles are anonymous semantic resources: each is named by an opaque
//! blank-node token ([`model::ArticleId`]) and carried as a JSON-LD document
//! ([`model::ArticleDoc`]) mapping predicate URIs to value descriptors. The
//! store enforces one fixed shape on the way in: a single
//! `http://schema.org/Article` type and at least one non-empty
//! `http://schema.org/name`.
//!
//! ## Modules
//! * [`model`] – Identifier and document model (blank-node tokens, value
//!   descriptors, the JSON-LD serde mapping).
//! * [`validate`] – The type-then-name shape check every write passes through.
//! * [`articles`] – The six-operation storage contract
//!   (`contains`/`get`/`set`/`remove`/`count`/`iter`) and the in-memory
//!   reference adaptor.
//! * [`persist`] – SQLite persistence adaptor with cursor-backed,
//!   insertion-ordered iteration.
//! * [`error`] – The shared error taxonomy (`NotFound`, `NotAnArticle`,
//!   `MissingName` plus the ambient failure kinds).
//! * [`server`] – Axum HTTP layer mapping the error taxonomy onto status
//!   codes and minting identifiers at creation time.
//! * [`settings`] – File-plus-environment configuration for the binaries.
//! * [`vocab`] – The schema.org and Hydra constants.
//!
//! ## Storage contract
//! Both adaptors implement [`articles::Articles`] with identical semantics:
//! validate-then-write on `set`, wholesale document replacement that keeps
//! an existing identifier's position in iteration order, idempotent
//! `remove`, and a lazy, restartable `iter` in first-write insertion order.
//! The in-memory adaptor is the oracle the relational adaptor is checked
//! against in the conformance tests.
//!
//! ## Quick Start
//! ```
//! use article_store::articles::{Articles, InMemoryArticles};
//! use article_store::model::{ArticleDoc, ArticleId, Term};
//! use article_store::vocab;
//!
//! let mut articles = InMemoryArticles::new();
//! let id = ArticleId::mint();
//! let mut doc = ArticleDoc::default();
//! doc.types = vec![vocab::schema::ARTICLE.to_owned()];
//! doc.properties.insert(
//!     vocab::schema::NAME.to_owned(),
//!     vec![Term::literal("An article")].into(),
//! );
//! articles.set(id.clone(), doc).unwrap();
//! assert!(articles.contains(&id).unwrap());
//! assert_eq!(articles.count().unwrap(), 1);
//! ```

pub mod articles;
pub mod error;
pub mod model;
pub mod persist;
pub mod server;
pub mod settings;
pub mod validate;
pub mod vocab;
