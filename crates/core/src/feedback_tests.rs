// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;

fn at_noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

#[test]
fn pending_feedback_persists_flat() {
    let record = FeedbackRecord::new()
        .with("term_id", "12")
        .with("comment", "Ewe spelling is off");
    let pending = PendingFeedback::new(record, at_noon());

    let json = serde_json::to_value(&pending).unwrap();
    assert_eq!(json["term_id"], "12");
    assert_eq!(json["comment"], "Ewe spelling is off");
    assert_eq!(json["timestamp"], "2026-03-01T12:00:00Z");
    assert_eq!(json["id"], pending.id.to_string());

    let back: PendingFeedback = serde_json::from_value(json).unwrap();
    assert_eq!(back, pending);
}

#[test]
fn reserved_keys_are_dropped_from_fields() {
    let record = FeedbackRecord::new()
        .with("timestamp", "yesterday")
        .with("id", "7")
        .with("comment", "ok");
    let pending = PendingFeedback::new(record, at_noon());

    assert_eq!(pending.fields.get("timestamp"), None);
    assert_eq!(pending.fields.get("id"), None);
    assert_eq!(pending.fields.get("comment"), Some("ok"));
}

#[test]
fn submission_body_omits_local_id() {
    let pending = PendingFeedback::new(FeedbackRecord::new().with("comment", "hi"), at_noon());
    let body = pending.submission_body();

    assert_eq!(body["comment"], "hi");
    assert!(body["timestamp"].as_str().unwrap().starts_with("2026-03-01T12:00:00"));
    assert!(body.get("id").is_none());
}

#[test]
fn each_pending_item_gets_distinct_id() {
    let a = PendingFeedback::new(FeedbackRecord::new(), at_noon());
    let b = PendingFeedback::new(FeedbackRecord::new(), at_noon());
    assert_ne!(a.id, b.id);
}
