// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

#[test]
fn test_missing_config_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load(temp.path()).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.server_url, "http://localhost:5000");
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
    assert!(!config.resync_on_reconnect);
}

#[test]
fn test_full_config_is_loaded() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        "server_url = \"https://dict.example.org\"\n\
         request_timeout_secs = 3\n\
         resync_on_reconnect = true\n",
    )
    .unwrap();

    let expected = Config {
        server_url: "https://dict.example.org".to_string(),
        request_timeout_secs: 3,
        resync_on_reconnect: true,
    };
    assert_eq!(Config::load(temp.path()).unwrap(), expected);
}

#[test]
fn test_partial_config_fills_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE_NAME), "resync_on_reconnect = true\n").unwrap();

    let config = Config::load(temp.path()).unwrap();
    assert!(config.resync_on_reconnect);
    assert_eq!(config.server_url, DEFAULT_SERVER_URL);
}

#[parameterized(
    not_toml = { "server_url = " },
    wrong_type = { "request_timeout_secs = \"soon\"" },
    bad_scheme = { "server_url = \"ftp://dict\"" },
    zero_timeout = { "request_timeout_secs = 0" },
)]
fn test_malformed_config_is_an_error(content: &str) {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE_NAME), content).unwrap();

    let err = Config::load(temp.path()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_server_override() {
    let config = Config::default().with_server_override(Some("http://10.0.0.2:5000".into()));
    assert_eq!(config.server_url, "http://10.0.0.2:5000");
    assert_eq!(
        Config::default().with_server_override(None).server_url,
        DEFAULT_SERVER_URL
    );
}

#[test]
fn test_data_dir_precedence() {
    let flag = Some(PathBuf::from("/flag"));
    let env_dir = Some(PathBuf::from("/env"));
    let xdg = Some(PathBuf::from("/xdg"));
    let home = Some(PathBuf::from("/home/u"));

    assert_eq!(
        data_dir_from(flag, env_dir.clone(), xdg.clone(), home.clone()),
        Some(PathBuf::from("/flag"))
    );
    assert_eq!(
        data_dir_from(None, env_dir, xdg.clone(), home.clone()),
        Some(PathBuf::from("/env"))
    );
    assert_eq!(
        data_dir_from(None, None, xdg, home.clone()),
        Some(PathBuf::from("/xdg/healthdict"))
    );
    assert_eq!(
        data_dir_from(None, None, None, home),
        Some(PathBuf::from("/home/u/.local/share/healthdict"))
    );
    assert_eq!(data_dir_from(None, None, None, None), None);
}

#[test]
fn test_explicit_dir_wins() {
    let temp = TempDir::new().unwrap();
    assert_eq!(resolve_data_dir(Some(temp.path())).unwrap(), temp.path());
}

#[test]
fn test_store_path() {
    assert_eq!(
        store_path(Path::new("/data")),
        PathBuf::from("/data/dictionary.db")
    );
}
