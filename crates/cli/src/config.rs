// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration and data directory layout.
//!
//! Everything lives in one data directory:
//! - `config.toml`: server address and client behavior (all fields optional)
//! - `dictionary.db`: the offline replica
//! - `settings.json`: language, install state, and pending feedback
//! - `*.lock`: cross-process writer locks

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::env;
use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const STORE_FILE_NAME: &str = "dictionary.db";
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const APP_DIR_NAME: &str = "healthdict";

/// Client configuration stored in `<data_dir>/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL for the `/api/*` endpoints.
    pub server_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Refresh the replica after reconnecting, in addition to replaying feedback.
    pub resync_on_reconnect: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            resync_on_reconnect: false,
        }
    }
}

impl Config {
    /// Loads configuration from `data_dir`, falling back to defaults when the
    /// file does not exist.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join(CONFIG_FILE_NAME);
        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(Error::Config(format!("failed to read config: {}", e))),
        };
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration and applies `HDICT_SERVER_URL`.
    pub fn load_with_env(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?.with_server_override(env::server_url());
        config.validate()?;
        Ok(config)
    }

    pub fn with_server_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.server_url = url;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        let url = self.server_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "server_url must start with http:// or https://, got '{}'",
                self.server_url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolve the data directory: `--dir`, then `HDICT_DIR`, then
/// `$XDG_DATA_HOME/healthdict`, then `~/.local/share/healthdict`.
pub fn resolve_data_dir(flag: Option<&Path>) -> Result<PathBuf> {
    data_dir_from(
        flag.map(Path::to_path_buf),
        env::data_dir(),
        env::xdg_data_home(),
        dirs::home_dir(),
    )
    .ok_or(Error::NoDataDir)
}

fn data_dir_from(
    flag: Option<PathBuf>,
    env_dir: Option<PathBuf>,
    xdg_data_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    flag.or(env_dir)
        .or_else(|| xdg_data_home.map(|d| d.join(APP_DIR_NAME)))
        .or_else(|| home.map(|h| h.join(".local/share").join(APP_DIR_NAME)))
}

/// Path of the offline replica inside `data_dir`.
pub fn store_path(data_dir: &Path) -> PathBuf {
    data_dir.join(STORE_FILE_NAME)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
