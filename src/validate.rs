//! Shape validation for inbound article documents.
//!
//! The order contract is fixed: the type shape is checked first and
//! short-circuits, then the name. Both adaptors call [`validate`] before
//! touching storage, so a rejected document never causes a write.

use crate::error::{ArticleError, Result};
use crate::model::ArticleDoc;
use crate::vocab;

/// Checks that `article` is a well-shaped `schema:Article`.
///
/// A valid document carries exactly one `@type`, equal to
/// [`vocab::schema::ARTICLE`], and at least one `schema:name` descriptor
/// whose literal value is present and not null. Pure; the document itself
/// is left untouched.
pub fn validate(article: &ArticleDoc) -> Result<()> {
    if article.types.len() != 1 || article.types[0] != vocab::schema::ARTICLE {
        return Err(ArticleError::NotAnArticle(article.types.clone()));
    }
    let named = article
        .property(vocab::schema::NAME)
        .is_some_and(|terms| terms.iter().any(|term| term.literal_value().is_some()));
    if !named {
        return Err(ArticleError::MissingName);
    }
    Ok(())
}
