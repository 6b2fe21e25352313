//! The adaptor-agnostic storage contract and its in-memory reference adaptor.
//!
//! Every adaptor implements the same six operations with identical
//! semantics, so the in-memory variant doubles as the oracle the relational
//! adaptor is tested against.

use std::collections::HashMap;
use std::hash::BuildHasherDefault;

use seahash::SeaHasher;

use crate::error::{ArticleError, Result};
use crate::model::{ArticleDoc, ArticleId};
use crate::validate::validate;

/// Token-keyed maps hash with seahash.
pub type TokenHasher = BuildHasherDefault<SeaHasher>;

/// One `(identifier, document)` pair produced by [`Articles::iter`].
pub type ArticleEntry = (ArticleId, ArticleDoc);

/// The article storage contract.
///
/// Implementations share these guarantees:
/// * `get` on an absent identifier fails with [`ArticleError::NotFound`]
///   carrying that identifier.
/// * `set` validates before writing; a rejected document causes no storage
///   mutation. An existing identifier is replaced wholesale and keeps its
///   position in iteration order.
/// * `remove` absorbs absence: deleting an identifier that was never stored
///   succeeds and does nothing.
/// * `iter` starts a fresh, finite traversal in first-write insertion order,
///   reflecting the store as of the call.
pub trait Articles: Send {
    /// True iff `id` currently has a stored document.
    fn contains(&self, id: &ArticleId) -> Result<bool>;

    /// The stored document for `id`.
    fn get(&self, id: &ArticleId) -> Result<ArticleDoc>;

    /// Validates `article` and then inserts or wholesale-replaces it under `id`.
    fn set(&mut self, id: ArticleId, article: ArticleDoc) -> Result<()>;

    /// Deletes the entry if present.
    fn remove(&mut self, id: &ArticleId) -> Result<()>;

    /// Number of currently stored documents.
    fn count(&self) -> Result<usize>;

    /// A lazy traversal over all entries in insertion order.
    fn iter(&self) -> Result<Box<dyn Iterator<Item = Result<ArticleEntry>> + '_>>;
}

/// Reference adaptor backed by a token-keyed map plus an insertion-order
/// index over the identifiers.
///
/// Operations never suspend and never touch a backing medium; the only
/// failure modes are the contract's own (`NotFound`, validation).
pub struct InMemoryArticles {
    kept: HashMap<ArticleId, ArticleDoc, TokenHasher>,
    order: Vec<ArticleId>,
}

impl InMemoryArticles {
    pub fn new() -> Self {
        Self {
            kept: HashMap::default(),
            order: Vec::new(),
        }
    }
}

impl Default for InMemoryArticles {
    fn default() -> Self {
        Self::new()
    }
}

impl Articles for InMemoryArticles {
    fn contains(&self, id: &ArticleId) -> Result<bool> {
        Ok(self.kept.contains_key(id))
    }

    fn get(&self, id: &ArticleId) -> Result<ArticleDoc> {
        self.kept
            .get(id)
            .cloned()
            .ok_or_else(|| ArticleError::NotFound(id.clone()))
    }

    fn set(&mut self, id: ArticleId, article: ArticleDoc) -> Result<()> {
        validate(&article)?;
        if !self.kept.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.kept.insert(id, article);
        Ok(())
    }

    fn remove(&mut self, id: &ArticleId) -> Result<()> {
        if self.kept.remove(id).is_some() {
            self.order.retain(|kept| kept != id);
        }
        Ok(())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.kept.len())
    }

    fn iter(&self) -> Result<Box<dyn Iterator<Item = Result<ArticleEntry>> + '_>> {
        Ok(Box::new(
            self.order
                .iter()
                .map(|id| Ok((id.clone(), self.kept[id].clone()))),
        ))
    }
}
