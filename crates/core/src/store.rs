// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed offline replica of the dictionary.
//!
//! The [`LocalStore`] holds two collections, `terms` and `categories`. Readers
//! see either nothing (never synced) or one complete snapshot: writers go
//! through [`LocalStore::write`], which commits every collection touched in
//! the closure as a single transaction.

use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};
use std::path::Path;

use crate::error::{Error, Result};
use crate::term::{Category, Term};

/// Fixed store identifier.
pub const STORE_NAME: &str = "HealthcareDictionary";

/// Schema version recorded in `PRAGMA user_version`.
pub const SCHEMA_VERSION: i64 = 1;

/// SQL schema for the replica.
///
/// Every statement is idempotent so that opening a store at a higher version
/// only adds what is missing.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY,
    position INTEGER NOT NULL,
    name_en TEXT NOT NULL,
    name_ewe TEXT NOT NULL
);

-- category_id is not a foreign key: terms may reference
-- categories the server did not send.
CREATE TABLE IF NOT EXISTS terms (
    id INTEGER PRIMARY KEY,
    position INTEGER NOT NULL,
    term_en TEXT NOT NULL,
    term_ewe TEXT NOT NULL,
    definition_en TEXT NOT NULL,
    definition_ewe TEXT NOT NULL,
    category_id INTEGER NOT NULL,
    category_name_en TEXT,
    category_name_ewe TEXT
);

CREATE INDEX IF NOT EXISTS idx_categories_position ON categories(position);
CREATE INDEX IF NOT EXISTS idx_terms_position ON terms(position);
CREATE INDEX IF NOT EXISTS idx_terms_term_en ON terms(term_en);
CREATE INDEX IF NOT EXISTS idx_terms_term_ewe ON terms(term_ewe);
CREATE INDEX IF NOT EXISTS idx_terms_category ON terms(category_id);
"#;

/// A named collection in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Terms,
    Categories,
}

impl Collection {
    /// Table name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Terms => "terms",
            Collection::Categories => "categories",
        }
    }

    /// Singular name used in error messages.
    pub fn record_name(&self) -> &'static str {
        match self {
            Collection::Terms => "term",
            Collection::Categories => "category",
        }
    }
}

/// A record type that lives in one collection.
pub trait Record: Sized {
    const COLLECTION: Collection;

    /// Columns selected by [`Record::from_row`], in order.
    const COLUMNS: &'static str;

    fn id(&self) -> i64;

    /// Inserts the record. Fails if the id already exists.
    fn insert(&self, tx: &Transaction<'_>, position: i64) -> rusqlite::Result<usize>;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

impl Record for Term {
    const COLLECTION: Collection = Collection::Terms;
    const COLUMNS: &'static str = "id, term_en, term_ewe, definition_en, definition_ewe, \
                                   category_id, category_name_en, category_name_ewe";

    fn id(&self) -> i64 {
        self.id
    }

    fn insert(&self, tx: &Transaction<'_>, position: i64) -> rusqlite::Result<usize> {
        tx.execute(
            "INSERT INTO terms (id, position, term_en, term_ewe, definition_en,
             definition_ewe, category_id, category_name_en, category_name_ewe)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                self.id,
                position,
                self.term_en,
                self.term_ewe,
                self.definition_en,
                self.definition_ewe,
                self.category_id,
                self.category_name_en,
                self.category_name_ewe,
            ],
        )
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Term {
            id: row.get(0)?,
            term_en: row.get(1)?,
            term_ewe: row.get(2)?,
            definition_en: row.get(3)?,
            definition_ewe: row.get(4)?,
            category_id: row.get(5)?,
            category_name_en: row.get(6)?,
            category_name_ewe: row.get(7)?,
        })
    }
}

impl Record for Category {
    const COLLECTION: Collection = Collection::Categories;
    const COLUMNS: &'static str = "id, name_en, name_ewe";

    fn id(&self) -> i64 {
        self.id
    }

    fn insert(&self, tx: &Transaction<'_>, position: i64) -> rusqlite::Result<usize> {
        tx.execute(
            "INSERT INTO categories (id, position, name_en, name_ewe) VALUES (?1, ?2, ?3, ?4)",
            params![self.id, position, self.name_en, self.name_ewe],
        )
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Category {
            id: row.get(0)?,
            name_en: row.get(1)?,
            name_ewe: row.get(2)?,
        })
    }
}

fn unsupported(e: impl std::fmt::Display) -> Error {
    Error::UnsupportedStorage(e.to_string())
}

fn transaction_failed(e: rusqlite::Error) -> Error {
    Error::Transaction(e.to_string())
}

/// Handle to the offline replica.
///
/// Opened once and shared by reference; nothing re-opens it implicitly.
pub struct LocalStore {
    conn: Connection,
}

impl LocalStore {
    /// Open the store at the given path, creating and upgrading the schema.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedStorage`] if the location cannot hold a
    /// persistent store.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::UnsupportedStorage(format!("cannot create {}: {e}", parent.display()))
                })?;
            }
        }

        let conn = Connection::open(path).map_err(unsupported)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )
        .map_err(unsupported)?;

        let store = LocalStore { conn };
        store.upgrade()?;
        Ok(store)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(unsupported)?;
        let store = LocalStore { conn };
        store.upgrade()?;
        Ok(store)
    }

    /// Creates missing collections and raises the recorded version.
    fn upgrade(&self) -> Result<()> {
        let version: i64 = self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .map_err(unsupported)?;

        if version > SCHEMA_VERSION {
            return Err(Error::UnsupportedStorage(format!(
                "{STORE_NAME} store is at version {version}, this client supports {SCHEMA_VERSION}"
            )));
        }

        self.conn.execute_batch(SCHEMA)?;

        if version < SCHEMA_VERSION {
            self.conn
                .execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
            tracing::debug!(from = version, to = SCHEMA_VERSION, "upgraded local store");
        }
        Ok(())
    }

    /// Schema version currently recorded in the store.
    pub fn version(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))?)
    }

    /// Run `f` inside one write transaction.
    ///
    /// Commits only if `f` returns `Ok`; any error rolls back every
    /// collection touched.
    pub fn write<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut StoreTransaction<'_>) -> Result<()>,
    {
        let tx = self.conn.transaction().map_err(transaction_failed)?;
        let mut batch = StoreTransaction { tx };
        f(&mut batch)?;
        batch.tx.commit().map_err(transaction_failed)
    }

    /// Replace one collection in its own transaction.
    pub fn replace_all<R: Record>(&mut self, records: &[R]) -> Result<()> {
        self.write(|tx| tx.replace_all(records))
    }

    /// All records of a collection in insertion order.
    pub fn get_all<R: Record>(&self) -> Result<Vec<R>> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY position",
            R::COLUMNS,
            R::COLLECTION.as_str()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let records = stmt
            .query_map([], |row| R::from_row(row))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// A single record by primary key.
    pub fn get_by_id<R: Record>(&self, id: i64) -> Result<R> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1",
            R::COLUMNS,
            R::COLLECTION.as_str()
        );
        let record = self
            .conn
            .query_row(&sql, params![id], |row| R::from_row(row))
            .optional()?;

        record.ok_or(Error::NotFound {
            collection: R::COLLECTION.record_name(),
            id,
        })
    }

    /// Number of records in a collection.
    pub fn count(&self, collection: Collection) -> Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", collection.as_str());
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}

/// Write access to the store for the duration of one transaction.
pub struct StoreTransaction<'a> {
    tx: Transaction<'a>,
}

impl StoreTransaction<'_> {
    /// Clear the record's collection and insert `records` in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transaction`] if any insert fails; the caller's
    /// transaction is then rolled back.
    pub fn replace_all<R: Record>(&mut self, records: &[R]) -> Result<()> {
        let collection = R::COLLECTION;
        self.tx
            .execute(&format!("DELETE FROM {}", collection.as_str()), [])
            .map_err(transaction_failed)?;

        for (position, record) in (0_i64..).zip(records) {
            record.insert(&self.tx, position).map_err(|e| {
                Error::Transaction(format!(
                    "inserting {} {}: {e}",
                    collection.record_name(),
                    record.id()
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
