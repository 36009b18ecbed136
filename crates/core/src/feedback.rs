// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User feedback records and their queued form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Keys owned by [`PendingFeedback`]; form fields with these names are dropped.
pub const RESERVED_KEYS: [&str; 2] = ["id", "timestamp"];

/// Free-form feedback fields as submitted by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackRecord(BTreeMap<String, String>);

impl FeedbackRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A feedback record waiting to be sent.
///
/// Persisted as a flat JSON object: the form fields alongside `id` and
/// `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingFeedback {
    /// Locally generated identity, used to match removals after replay.
    pub id: Uuid,
    /// When the record was queued.
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub fields: FeedbackRecord,
}

impl PendingFeedback {
    /// Stamps a record with a fresh id and the given time.
    pub fn new(mut fields: FeedbackRecord, timestamp: DateTime<Utc>) -> Self {
        fields.0.retain(|k, _| !RESERVED_KEYS.contains(&k.as_str()));
        PendingFeedback {
            id: Uuid::new_v4(),
            timestamp,
            fields,
        }
    }

    /// JSON body for submission: the fields plus `timestamp`.
    pub fn submission_body(&self) -> serde_json::Value {
        let mut body: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        body.insert(
            "timestamp".to_string(),
            serde_json::Value::String(self.timestamp.to_rfc3339()),
        );
        serde_json::Value::Object(body)
    }
}

#[cfg(test)]
#[path = "feedback_tests.rs"]
mod tests;
