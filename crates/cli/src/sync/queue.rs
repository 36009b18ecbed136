// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pending feedback queue.
//!
//! Feedback that could not be delivered is kept as a JSON array under the
//! `pendingFeedback` setting. Every change is written through the settings
//! store, which makes it durable before the call returns. On replay each item
//! is submitted independently and only the delivered items are removed,
//! matched by the id stamped at enqueue time.

use std::collections::HashSet;
use std::path::Path;

use chrono::Utc;
use futures_util::future::join_all;
use hd_core::{
    keys, FeedbackRecord, PendingFeedback, SettingsStore, WriterLock, QUEUE_LOCK, REPLAY_LOCK,
};
use uuid::Uuid;

use super::api::DictionaryApi;

/// Tag under which background replay is registered.
pub const REPLAY_TAG: &str = "sync-feedback";

/// Error type for queue operations.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    /// Reading or writing the pending list failed.
    #[error("pending feedback storage error: {0}")]
    Storage(#[from] hd_core::Error),

    /// The pending list is not valid JSON.
    #[error("pending feedback list is unreadable: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of a replay pass itself, as opposed to failed submissions.
pub type ReplayError = QueueError;

/// Result type for queue operations.
pub type QueueResult<T> = Result<T, QueueError>;

/// Background replay registration.
///
/// Implementations ask the platform to run a replay later, even if the
/// client is no longer running. Absence is tolerated.
pub trait ReplayHook: Send + Sync {
    fn register(&self, tag: &str) -> std::io::Result<()>;
}

/// Outcome of one replay pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ReplaySummary {
    pub succeeded: usize,
    pub total: usize,
}

impl ReplaySummary {
    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }

    /// User-facing notification text.
    pub fn message(&self) -> String {
        format!(
            "Submitted {} of {} pending feedback items.",
            self.succeeded, self.total
        )
    }
}

/// How a feedback submission was handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    /// Accepted by the server.
    Sent,
    /// Stored for a later replay.
    Queued(PendingFeedback),
    /// Refused by the server with this status; not queued.
    Rejected(u16),
}

/// The persisted list of feedback awaiting submission.
pub struct FeedbackQueue<'a, S: SettingsStore + ?Sized> {
    settings: &'a S,
    hook: Option<&'a dyn ReplayHook>,
    lock_dir: Option<&'a Path>,
}

impl<'a, S: SettingsStore + ?Sized> FeedbackQueue<'a, S> {
    pub fn new(settings: &'a S) -> Self {
        FeedbackQueue {
            settings,
            hook: None,
            lock_dir: None,
        }
    }

    /// Register for background replay after every enqueue.
    pub fn with_hook(mut self, hook: &'a dyn ReplayHook) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Coordinate with other processes through lock files in `dir`.
    pub fn with_lock_dir(mut self, dir: &'a Path) -> Self {
        self.lock_dir = Some(dir);
        self
    }

    /// All pending items, oldest first.
    pub fn pending(&self) -> QueueResult<Vec<PendingFeedback>> {
        match self.settings.get(keys::PENDING_FEEDBACK)? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    pub fn len(&self) -> QueueResult<usize> {
        Ok(self.pending()?.len())
    }

    pub fn is_empty(&self) -> QueueResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Stamp `record` with the current time and append it to the list.
    ///
    /// The item is persisted before this returns.
    pub fn enqueue(&self, record: FeedbackRecord) -> QueueResult<PendingFeedback> {
        let item = PendingFeedback::new(record, Utc::now());
        self.modify(|items| items.push(item.clone()))?;
        tracing::info!(id = %item.id, "feedback queued");

        if let Some(hook) = self.hook {
            if let Err(e) = hook.register(REPLAY_TAG) {
                tracing::warn!(error = %e, "background replay registration failed");
            }
        }
        Ok(item)
    }

    /// Submit `record` directly, queueing it if the failure is retryable.
    pub async fn submit_or_enqueue<A: DictionaryApi + ?Sized>(
        &self,
        api: &A,
        record: FeedbackRecord,
    ) -> QueueResult<Delivery> {
        let item = PendingFeedback::new(record, Utc::now());
        match api.submit_feedback(item.submission_body()).await {
            Ok(()) => Ok(Delivery::Sent),
            Err(e) => match e.refusal() {
                Some(status) => {
                    tracing::warn!(status, "feedback refused by server");
                    Ok(Delivery::Rejected(status))
                }
                None => {
                    tracing::info!(error = %e, "feedback submission failed, queueing");
                    let queued = self.enqueue(item.fields)?;
                    Ok(Delivery::Queued(queued))
                }
            },
        }
    }

    /// Resubmit every pending item.
    ///
    /// Submissions run concurrently and a failed one does not stop the rest.
    /// Once all have resolved, exactly the delivered items are removed; items
    /// enqueued in the meantime are kept. Only a failure to read or write the
    /// list is an error.
    pub async fn replay_pending<A: DictionaryApi + ?Sized>(
        &self,
        api: &A,
    ) -> Result<ReplaySummary, ReplayError> {
        if self.is_empty()? {
            return Ok(ReplaySummary::default());
        }

        let _lock = self
            .lock_dir
            .map(|dir| WriterLock::acquire_in(dir, REPLAY_LOCK))
            .transpose()?;

        let snapshot = self.pending()?;
        let outcomes = join_all(snapshot.iter().map(|item| async move {
            let outcome = api.submit_feedback(item.submission_body()).await;
            (item.id, outcome)
        }))
        .await;

        let delivered: HashSet<Uuid> = outcomes
            .into_iter()
            .filter_map(|(id, outcome)| match outcome {
                Ok(()) => Some(id),
                Err(e) => {
                    tracing::debug!(%id, error = %e, "feedback replay failed");
                    None
                }
            })
            .collect();

        if !delivered.is_empty() {
            self.modify(|items| items.retain(|item| !delivered.contains(&item.id)))?;
        }

        let summary = ReplaySummary {
            succeeded: delivered.len(),
            total: snapshot.len(),
        };
        tracing::info!(
            succeeded = summary.succeeded,
            total = summary.total,
            "feedback replay finished"
        );
        Ok(summary)
    }

    /// Read-modify-write of the list under the queue lock.
    fn modify(&self, f: impl FnOnce(&mut Vec<PendingFeedback>)) -> QueueResult<()> {
        let _lock = self
            .lock_dir
            .map(|dir| WriterLock::wait_in(dir, QUEUE_LOCK))
            .transpose()?;

        let mut items = self.pending()?;
        f(&mut items);
        self.write_pending(&items)
    }

    fn write_pending(&self, items: &[PendingFeedback]) -> QueueResult<()> {
        if items.is_empty() {
            self.settings.remove(keys::PENDING_FEEDBACK)?;
        } else {
            self.settings
                .set(keys::PENDING_FEEDBACK, &serde_json::to_string(items)?)?;
        }
        Ok(())
    }
}
