// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::{capture, TestContext};
use hd_core::FeedbackRecord;

#[test]
fn status_before_install() {
    let ctx = TestContext::new();

    let output = capture(|out| {
        run_impl(&ctx.store, &ctx.settings, "http://localhost:5000", OutputFormat::Text, out)
    });

    assert!(output.contains("Installed:        no\n"));
    assert!(output.contains("Last sync:        never\n"));
    assert!(output.contains("Terms:            0\n"));
    assert!(output.contains("Language:         en\n"));
}

#[test]
fn status_json_after_install() {
    let ctx = TestContext::installed();
    FeedbackQueue::new(&ctx.settings)
        .enqueue(FeedbackRecord::new().with("comment", "queued"))
        .unwrap();
    ctx.settings.set_language(Language::Ewe).unwrap();

    let output = capture(|out| {
        run_impl(&ctx.store, &ctx.settings, "http://dict", OutputFormat::Json, out)
    });
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["installed"], true);
    assert!(json["last_sync"].is_string());
    assert_eq!(json["terms"], 3);
    assert_eq!(json["categories"], 2);
    assert_eq!(json["pending_feedback"], 1);
    assert_eq!(json["language"], "ewe");
    assert_eq!(json["server_url"], "http://dict");
}
