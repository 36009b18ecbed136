// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lightweight persisted settings, kept outside the [`LocalStore`].
//!
//! A flat string key-value surface holding the language preference, the
//! installed flag, the last-sync time and the pending-feedback list.
//!
//! [`LocalStore`]: crate::store::LocalStore

use chrono::{DateTime, TimeZone, Utc};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::lock::WriterLock;
use crate::term::Language;

/// Settings filename within the data directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Lock file held across every read-modify-write of the settings file.
pub const SETTINGS_LOCK: &str = "settings.lock";

/// Well-known settings keys.
pub mod keys {
    pub const LANGUAGE: &str = "language";
    pub const DB_INSTALLED: &str = "dbInstalled";
    pub const LAST_SYNC: &str = "lastSync";
    pub const PENDING_FEEDBACK: &str = "pendingFeedback";
}

/// Persistent string key-value store.
///
/// `set` and `remove` are durable when they return.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Typed accessors over any [`SettingsStore`].
pub trait SettingsExt: SettingsStore {
    /// The language preference; unknown or missing values read as English.
    fn language(&self) -> Result<Language> {
        Ok(self
            .get(keys::LANGUAGE)?
            .and_then(|v| v.parse().ok())
            .unwrap_or_default())
    }

    fn set_language(&self, language: Language) -> Result<()> {
        self.set(keys::LANGUAGE, language.as_str())
    }

    /// True once a sync has completed.
    fn is_installed(&self) -> Result<bool> {
        Ok(self.get(keys::DB_INSTALLED)?.as_deref() == Some("true"))
    }

    /// Time of the last successful sync. Unparseable values read as `None`.
    fn last_sync(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(self
            .get(keys::LAST_SYNC)?
            .and_then(|v| v.trim().parse::<i64>().ok())
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()))
    }

    /// Record a completed sync.
    fn mark_synced(&self, at: DateTime<Utc>) -> Result<()> {
        self.set(keys::DB_INSTALLED, "true")?;
        self.set(keys::LAST_SYNC, &at.timestamp_millis().to_string())
    }
}

impl<T: SettingsStore + ?Sized> SettingsExt for T {}

/// Settings persisted as a JSON object in one file.
///
/// Every read goes to disk so that writes from other processes are visible.
/// Writers in any process serialize on `settings.lock` next to the file.
#[derive(Debug)]
pub struct FileSettings {
    path: PathBuf,
    lock_path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_guard: Mutex<()>,
}

impl FileSettings {
    /// Open settings at the given path. The file is created on first write.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(FileSettings {
            path: path.to_path_buf(),
            lock_path: path.with_file_name(SETTINGS_LOCK),
            write_guard: Mutex::new(()),
        })
    }

    /// Open `settings.json` in `dir`.
    pub fn open_in(dir: &Path) -> Result<Self> {
        Self::open(&dir.join(SETTINGS_FILE_NAME))
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            Error::CorruptedData(format!("{}: {e}", self.path.display()))
        })
    }

    /// Write through a uniquely named temp file in the same directory, then
    /// rename it over the settings file so readers never see a torn file.
    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, map)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| Error::Io(e.error))?;
        Ok(())
    }

    fn modify(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<()> {
        let _guard = self
            .write_guard
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let _lock = WriterLock::wait(&self.lock_path)?;
        let mut map = self.read_map()?;
        f(&mut map);
        self.write_map(&map)
    }
}

impl SettingsStore for FileSettings {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.modify(|map| {
            map.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.modify(|map| {
            map.remove(key);
        })
    }
}

/// In-process settings (for testing).
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values().remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
