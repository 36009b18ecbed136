// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hd-core: Offline data layer for the healthcare dictionary client
//!
//! This crate provides the dictionary records, the SQLite-backed local
//! replica, the settings store, the offline query engine and the
//! single-writer lock shared by every process using one data directory.

pub mod error;
pub mod feedback;
pub mod lock;
pub mod query;
pub mod settings;
pub mod store;
pub mod term;

pub use error::{Error, Result};
pub use feedback::{FeedbackRecord, PendingFeedback, RESERVED_KEYS};
pub use lock::{WriterLock, QUEUE_LOCK, REPLAY_LOCK, SYNC_LOCK};
pub use query::{filter_terms, OfflineQuery};
pub use settings::{keys, FileSettings, MemorySettings, SettingsExt, SettingsStore};
pub use store::{Collection, LocalStore, Record, StoreTransaction};
pub use term::{Category, Language, Term};
