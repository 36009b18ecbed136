// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod categories;
pub mod feedback;
pub mod lang;
pub mod search;
pub mod show;
pub mod status;
pub mod sync;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod watch;

use std::path::{Path, PathBuf};

use hd_core::{FileSettings, Language, LocalStore, SettingsExt, SettingsStore};

use crate::config::{resolve_data_dir, store_path, Config};
use crate::error::{Error, Result};
use crate::sync::HttpApi;

/// Resolved data directory and configuration for one invocation.
pub struct Context {
    pub data_dir: PathBuf,
    pub config: Config,
}

impl Context {
    /// Resolve the data directory, creating it, and load its configuration.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        let data_dir = resolve_data_dir(dir)?;
        std::fs::create_dir_all(&data_dir)?;
        let config = Config::load_with_env(&data_dir)?;
        tracing::debug!(data_dir = %data_dir.display(), server = %config.server_url, "context");
        Ok(Context { data_dir, config })
    }

    pub fn settings(&self) -> Result<FileSettings> {
        Ok(FileSettings::open_in(&self.data_dir)?)
    }

    pub fn open_store(&self) -> Result<LocalStore> {
        Ok(LocalStore::open(&store_path(&self.data_dir))?)
    }

    pub fn api(&self) -> Result<HttpApi> {
        Ok(HttpApi::new(
            &self.config.server_url,
            self.config.request_timeout(),
        )?)
    }
}

/// Single-threaded runtime for the async sync paths.
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Io(std::io::Error::other(format!("tokio: {}", e))))
}

/// The `--lang` flag, else the saved preference.
pub fn effective_language<S: SettingsStore + ?Sized>(
    settings: &S,
    flag: Option<Language>,
) -> Result<Language> {
    match flag {
        Some(language) => Ok(language),
        None => Ok(settings.language()?),
    }
}
