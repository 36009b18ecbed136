// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for hd-core operations.

use thiserror::Error;

/// All possible errors that can occur in hd-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("offline storage is not supported: {0}\n  hint: offline search and queued feedback are disabled")]
    UnsupportedStorage(String),

    #[error("transaction failed: {0}")]
    Transaction(String),

    #[error("{collection} not found: {id}")]
    NotFound { collection: &'static str, id: i64 },

    #[error("the offline dictionary has not been installed yet\n  hint: connect to the internet and run 'hdict install'")]
    NotInstalled,

    #[error("another process is writing the offline data\n  hint: wait for it to finish and try again")]
    Busy,

    #[error("invalid language: '{0}'\n  hint: valid languages are: en, ewe")]
    InvalidLanguage(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for hd-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
