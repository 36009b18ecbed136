// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sync engine: refreshes the local replica from the server listings.

use std::path::Path;

use chrono::{DateTime, Utc};
use hd_core::{LocalStore, SettingsExt, SettingsStore, WriterLock, SYNC_LOCK};

use super::api::{ApiError, DictionaryApi};

/// Error type for synchronization.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// A listing request failed; the replica was not touched.
    #[error("failed to download the dictionary: {0}\n  hint: check your connection and run 'hdict sync' again")]
    Fetch(#[from] ApiError),

    /// The local store could not be opened.
    #[error("offline storage is not supported: {0}")]
    StorageUnsupported(String),

    /// The atomic replace failed and was rolled back.
    #[error("failed to save the dictionary: {0}\n  hint: the previous offline data is unchanged; run 'hdict sync' again")]
    Transaction(String),

    /// Another context holds the sync lock.
    #[error("a sync is already in progress\n  hint: wait for it to finish and try again")]
    Busy,

    /// The installed flag or sync time could not be recorded.
    #[error("failed to record sync state: {0}")]
    Settings(hd_core::Error),
}

impl From<hd_core::Error> for SyncError {
    fn from(err: hd_core::Error) -> Self {
        match err {
            hd_core::Error::UnsupportedStorage(msg) => SyncError::StorageUnsupported(msg),
            hd_core::Error::Transaction(msg) => SyncError::Transaction(msg),
            hd_core::Error::Database(e) => SyncError::Transaction(e.to_string()),
            hd_core::Error::Busy => SyncError::Busy,
            other => SyncError::Settings(other),
        }
    }
}

/// What a successful sync wrote.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SyncReport {
    pub categories: usize,
    pub terms: usize,
    pub synced_at: DateTime<Utc>,
}

/// Downloads both listings and replaces the replica in one transaction.
pub struct Synchronizer<'a, A: DictionaryApi + ?Sized, S: SettingsStore + ?Sized> {
    api: &'a A,
    settings: &'a S,
    lock_dir: Option<&'a Path>,
}

impl<'a, A: DictionaryApi + ?Sized, S: SettingsStore + ?Sized> Synchronizer<'a, A, S> {
    pub fn new(api: &'a A, settings: &'a S) -> Self {
        Synchronizer {
            api,
            settings,
            lock_dir: None,
        }
    }

    /// Hold `sync.lock` in `dir` for the duration of each sync.
    pub fn with_lock_dir(mut self, dir: &'a Path) -> Self {
        self.lock_dir = Some(dir);
        self
    }

    /// Refresh `store` from the server.
    ///
    /// Both listings are fetched concurrently. The store is only touched once
    /// both have arrived, and then categories and terms are replaced in a
    /// single transaction. The installed flag and sync time are recorded after
    /// the commit.
    pub async fn synchronize(&self, store: &mut LocalStore) -> Result<SyncReport, SyncError> {
        let _lock = self
            .lock_dir
            .map(|dir| WriterLock::acquire_in(dir, SYNC_LOCK))
            .transpose()?;

        tracing::info!("sync started");
        let (categories, terms) = tokio::join!(self.api.fetch_categories(), self.api.fetch_terms());

        let categories =
            categories.inspect_err(|e| tracing::warn!(error = %e, "category fetch failed"))?;
        let terms = terms.inspect_err(|e| tracing::warn!(error = %e, "term fetch failed"))?;

        store
            .write(|tx| {
                tx.replace_all(&categories)?;
                tx.replace_all(&terms)
            })
            .inspect_err(|e| tracing::warn!(error = %e, "replica write rolled back"))?;

        let synced_at = Utc::now();
        self.settings
            .mark_synced(synced_at)
            .map_err(SyncError::Settings)?;

        tracing::info!(
            categories = categories.len(),
            terms = terms.len(),
            "sync finished"
        );

        Ok(SyncReport {
            categories: categories.len(),
            terms: terms.len(),
            synced_at,
        })
    }
}
