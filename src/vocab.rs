//! Namespace constants for the vocabulary the store validates against.
//!
//! These are configuration, not behavior: the validator and the HTTP layer
//! refer to them, but nothing in the storage contract depends on their
//! particular values.

/// Terms from the <http://schema.org/> namespace.
pub mod schema {
    /// The single type every stored document must carry.
    pub const ARTICLE: &str = "http://schema.org/Article";
    /// The predicate that must hold at least one literal name.
    pub const NAME: &str = "http://schema.org/name";
}

/// Terms from the Hydra core vocabulary, used by the HTTP collection views.
pub mod hydra {
    pub const COLLECTION: &str = "http://www.w3.org/ns/hydra/core#Collection";
    pub const MEMBER: &str = "http://www.w3.org/ns/hydra/core#member";
    pub const TOTAL_ITEMS: &str = "http://www.w3.org/ns/hydra/core#totalItems";
}
