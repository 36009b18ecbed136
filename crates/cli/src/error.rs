// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::sync::{ApiError, QueueError, SyncError};

/// All possible errors that can occur in the hdict library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] hd_core::Error),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("invalid feedback field '{0}'\n  hint: fields are written as key=value, e.g. -f comment=\"...\"")]
    InvalidField(String),

    #[error("the server refused this feedback (status {0})\n  hint: check the field names and values; it was not queued")]
    FeedbackRejected(u16),

    #[error("feedback has no fields\n  hint: pass at least one -f key=value")]
    EmptyFeedback,

    #[error("cannot determine the data directory\n  hint: pass --dir or set HDICT_DIR")]
    NoDataDir,

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for hdict operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
