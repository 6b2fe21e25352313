//! The identifier and document model for articles.
//!
//! Articles are anonymous nodes: an [`ArticleId`] is an opaque blank-node
//! token, equal to another identifier exactly when the tokens match. An
//! [`ArticleDoc`] is a JSON-LD node object mapping predicate URIs to ordered
//! sequences of value descriptors ([`Term`]), with the `@id`, `@type` and
//! `@context` keywords carried as dedicated fields.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use uuid::Uuid;

// ------------- ArticleId -------------

/// An opaque blank-node token naming one article within a store.
///
/// Equality and hashing are over the token value, never over instance
/// identity, so two `ArticleId`s carrying the same token address the same
/// stored article. The serialized form is the blank-node notation
/// `_:<token>`; deserialization accepts the prefix and strips it.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        match token.strip_prefix("_:") {
            Some(bare) => Self(bare.to_owned()),
            None => Self(token),
        }
    }
    /// Mints a fresh identifier. Only the layer accepting new articles
    /// should call this; storage never generates identifiers on its own.
    pub fn mint() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

impl Serialize for ArticleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ArticleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(ArticleId::new(String::deserialize(deserializer)?))
    }
}

// ------------- Term -------------

/// One JSON-LD value descriptor: a literal with optional language tag and
/// datatype, or a reference to another node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Term {
    Node {
        #[serde(rename = "@id")]
        id: String,
    },
    Literal {
        #[serde(rename = "@value")]
        value: Json,
        #[serde(rename = "@language", default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
        datatype: Option<String>,
    },
}

impl Term {
    pub fn literal(value: impl Into<Json>) -> Self {
        Term::Literal {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }
    pub fn node(id: impl Into<String>) -> Self {
        Term::Node { id: id.into() }
    }
    /// The literal value, if this term carries one that is present and
    /// not explicitly null.
    pub fn literal_value(&self) -> Option<&Json> {
        match self {
            Term::Literal { value, .. } if !value.is_null() => Some(value),
            _ => None,
        }
    }
}

// ------------- Terms -------------

/// An ordered sequence of value descriptors under one predicate.
///
/// JSON-LD allows a lone descriptor in place of a one-element array, so
/// deserialization accepts both; serialization always writes the array form.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Terms(Vec<Term>);

impl Terms {
    pub fn into_inner(self) -> Vec<Term> {
        self.0
    }
}

impl Deref for Terms {
    type Target = [Term];
    fn deref(&self) -> &[Term] {
        &self.0
    }
}

impl From<Vec<Term>> for Terms {
    fn from(terms: Vec<Term>) -> Self {
        Self(terms)
    }
}

impl Serialize for Terms {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Terms {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            Many(Vec<Term>),
            One(Term),
        }
        Ok(match OneOrMany::deserialize(deserializer)? {
            OneOrMany::Many(terms) => Terms(terms),
            OneOrMany::One(term) => Terms(vec![term]),
        })
    }
}

fn one_or_many_types<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<String>),
        One(String),
    }
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(types) => types,
        OneOrMany::One(ty) => vec![ty],
    })
}

// ------------- ArticleDoc -------------

/// A JSON-LD article document.
///
/// Everything apart from the `@context`, `@id` and `@type` keywords is a
/// predicate-URI key mapped to its descriptor sequence. A stored document
/// only ever changes through wholesale replacement, so the struct is plain
/// data with no interior bookkeeping.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ArticleDoc {
    #[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Json>,
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ArticleId>,
    #[serde(
        rename = "@type",
        default,
        deserialize_with = "one_or_many_types",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub types: Vec<String>,
    #[serde(flatten)]
    pub properties: BTreeMap<String, Terms>,
}

impl ArticleDoc {
    /// The descriptor sequence under `predicate`, if the key is present.
    pub fn property(&self, predicate: &str) -> Option<&Terms> {
        self.properties.get(predicate)
    }
}
