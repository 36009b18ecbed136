// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::{Arc, Mutex};
use std::thread;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

pub use predicates::prelude::*;
pub use similar_asserts::assert_eq;
pub use tempfile::TempDir;

/// A port nothing listens on, for commands that must fail to connect.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

const CATEGORIES: &str = r#"[
  {"id": 1, "name_en": "Diseases", "name_ewe": "Dɔlélewo"},
  {"id": 2, "name_en": "Anatomy", "name_ewe": "Ŋutilã"}
]"#;

const TERMS: &str = r#"[
  {"id": 10, "term_en": "Malaria", "term_ewe": "Asrã",
   "definition_en": "A disease spread by mosquitoes that causes fever.",
   "definition_ewe": "Dɔléle si anyidzɔdzɔ kakana.",
   "category_id": 1, "category_name_en": "Diseases", "category_name_ewe": "Dɔlélewo"},
  {"id": 11, "term_en": "Fever", "term_ewe": "Ŋdɔ",
   "definition_en": "A body temperature above normal.",
   "definition_ewe": null,
   "category_id": 1},
  {"id": 12, "term_en": "Heart", "term_ewe": "Dzi",
   "definition_en": "The organ that pumps blood.",
   "definition_ewe": "Ŋutilãme nu si ʋuʋua ʋu.",
   "category_id": 2}
]"#;

type Received = Arc<Mutex<Vec<serde_json::Value>>>;

/// Canned dictionary server on a loopback port.
///
/// Serves the sample listing and records every feedback body it accepts. It
/// runs on its own thread and runtime until the test binary exits.
pub struct Server {
    url: String,
    feedback: Received,
}

impl Server {
    pub fn start() -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let feedback = Received::default();
        let app = Router::new()
            .route("/api/categories", get(|| async { listing(CATEGORIES) }))
            .route("/api/terms", get(|| async { listing(TERMS) }))
            .route("/api/feedback", post(record_feedback))
            .with_state(Arc::clone(&feedback));

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });
        Server { url, feedback }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn feedback(&self) -> Vec<serde_json::Value> {
        self.feedback.lock().unwrap().clone()
    }
}

fn listing(body: &'static str) -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/json")], body)
}

async fn record_feedback(
    State(received): State<Received>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    received.lock().unwrap().push(body);
    (StatusCode::CREATED, Json(serde_json::json!({"ok": true})))
}

/// An isolated data directory pointed at `server_url`.
pub struct DataDir {
    temp: TempDir,
    server_url: String,
}

impl DataDir {
    pub fn new(server_url: &str) -> Self {
        DataDir {
            temp: TempDir::new().unwrap(),
            server_url: server_url.to_string(),
        }
    }

    /// A data directory whose dictionary has been installed from `server`.
    pub fn installed(server: &Server) -> Self {
        let dir = Self::new(server.url());
        dir.hdict().arg("install").assert().success();
        dir
    }

    pub fn path(&self) -> &std::path::Path {
        self.temp.path()
    }

    /// Point later commands at a different server.
    pub fn set_server(&mut self, url: &str) {
        self.server_url = url.to_string();
    }

    pub fn hdict(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("hdict");
        cmd.env("HDICT_DIR", self.temp.path())
            .env("HDICT_SERVER_URL", &self.server_url)
            .env("HOME", self.temp.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

pub fn hdict() -> Command {
    cargo_bin_cmd!("hdict")
}
