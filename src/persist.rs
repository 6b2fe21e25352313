// used for persistence
use std::collections::VecDeque;

use rusqlite::{Connection, OptionalExtension, params};

use crate::articles::{ArticleEntry, Articles};
use crate::error::{ArticleError, Result};
use crate::model::{ArticleDoc, ArticleId};
use crate::validate::validate;

/// Rows fetched per round-trip while iterating.
const CURSOR_BATCH: usize = 64;

// ------------- Persistence -------------

/// Relational adaptor backed by a single `Article` table.
///
/// The ordinal column is a surrogate assigned on first insert and left
/// untouched by updates, which is what realizes first-write insertion-order
/// iteration across process restarts. Documents are stored as serialized
/// JSON in the document column, keyed by the external identifier token.
pub struct SqliteArticles {
    db: Connection,
}

impl SqliteArticles {
    /// Wraps an open connection. The `Article` table must already exist;
    /// provisioning is a separate one-time step (see
    /// [`SqliteArticles::create_table`] and the `initdb` binary).
    pub fn new(db: Connection) -> Self {
        Self { db }
    }

    /// One-time schema provisioning.
    pub fn create_table(db: &Connection) -> Result<()> {
        db.execute_batch(
            "
            create table if not exists Article (
                Article_Ordinal integer primary key autoincrement,
                Article_Identifier text not null,
                Article_Document text not null,
                constraint unique_Article_Identifier unique (
                    Article_Identifier
                )
            );
            ",
        )?;
        Ok(())
    }
}

impl Articles for SqliteArticles {
    fn contains(&self, id: &ArticleId) -> Result<bool> {
        let found = self
            .db
            .prepare_cached(
                "
                select 1
                    from Article
                    where Article_Identifier = ?
            ",
            )?
            .query_row(params![id.token()], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    fn get(&self, id: &ArticleId) -> Result<ArticleDoc> {
        let document: Option<String> = self
            .db
            .prepare_cached(
                "
                select Article_Document
                    from Article
                    where Article_Identifier = ?
            ",
            )?
            .query_row(params![id.token()], |row| row.get(0))
            .optional()?;
        match document {
            Some(document) => decode(id, &document),
            None => Err(ArticleError::NotFound(id.clone())),
        }
    }

    fn set(&mut self, id: ArticleId, article: ArticleDoc) -> Result<()> {
        validate(&article)?;
        let document = serde_json::to_string(&article)
            .map_err(|e| ArticleError::Persistence(e.to_string()))?;
        // An update keeps the ordinal, so the article keeps its place in
        // iteration order.
        self.db
            .prepare_cached(
                "
                insert into Article (
                    Article_Identifier,
                    Article_Document
                ) values (?, ?)
                on conflict (Article_Identifier)
                do update set Article_Document = excluded.Article_Document
            ",
            )?
            .execute(params![id.token(), document])?;
        Ok(())
    }

    fn remove(&mut self, id: &ArticleId) -> Result<()> {
        self.db
            .prepare_cached(
                "
                delete from Article
                    where Article_Identifier = ?
            ",
            )?
            .execute(params![id.token()])?;
        Ok(())
    }

    fn count(&self) -> Result<usize> {
        let count: i64 = self
            .db
            .prepare_cached("select count(*) from Article")?
            .query_row([], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn iter(&self) -> Result<Box<dyn Iterator<Item = Result<ArticleEntry>> + '_>> {
        Ok(Box::new(DocumentCursor::new(&self.db)))
    }
}

fn decode(id: &ArticleId, document: &str) -> Result<ArticleDoc> {
    serde_json::from_str(document).map_err(|e| ArticleError::DataCorruption {
        message: format!("stored document for {id} no longer parses: {e}"),
    })
}

/// Keyset cursor over the `Article` table in ordinal order.
///
/// Fetches [`CURSOR_BATCH`] rows per round-trip and remembers the last
/// ordinal seen, so iterating a large store never materializes the whole
/// table. Rows inserted behind the cursor's position during traversal are
/// skipped; rows ahead of it are picked up. Either way the traversal stays
/// finite and well-formed.
struct DocumentCursor<'db> {
    db: &'db Connection,
    after: i64,
    batch: VecDeque<(i64, ArticleId, String)>,
    exhausted: bool,
    failed: bool,
}

impl<'db> DocumentCursor<'db> {
    fn new(db: &'db Connection) -> Self {
        Self {
            db,
            after: 0,
            batch: VecDeque::new(),
            exhausted: false,
            failed: false,
        }
    }

    fn refill(&mut self) -> Result<()> {
        let mut statement = self.db.prepare_cached(
            "
            select Article_Ordinal, Article_Identifier, Article_Document
                from Article
                where Article_Ordinal > ?
                order by Article_Ordinal asc
                limit ?
        ",
        )?;
        let rows = statement.query_map(params![self.after, CURSOR_BATCH as i64], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;
        let mut fetched = 0;
        for row in rows {
            let (ordinal, token, document) = row?;
            self.batch.push_back((ordinal, ArticleId::new(token), document));
            fetched += 1;
        }
        if fetched < CURSOR_BATCH {
            self.exhausted = true;
        }
        Ok(())
    }
}

impl Iterator for DocumentCursor<'_> {
    type Item = Result<ArticleEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if self.batch.is_empty() {
            if self.exhausted {
                return None;
            }
            if let Err(e) = self.refill() {
                self.failed = true;
                return Some(Err(e));
            }
        }
        let (ordinal, id, document) = self.batch.pop_front()?;
        self.after = ordinal;
        Some(decode(&id, &document).map(|article| (id, article)))
    }
}
