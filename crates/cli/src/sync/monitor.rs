// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Connectivity monitor.
//!
//! A two-state machine driven by platform connectivity signals. Regaining
//! connectivity triggers one replay of the pending feedback, and optionally a
//! refresh of the replica. There are no timers; the next reconnect is the
//! only retry.

use std::fmt;
use std::str::FromStr;

use hd_core::{LocalStore, OfflineQuery, SettingsStore};
use tokio::sync::mpsc;

use super::api::DictionaryApi;
use super::engine::{SyncReport, Synchronizer};
use super::queue::{FeedbackQueue, ReplaySummary};

/// Platform connectivity state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
}

impl Connectivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Connectivity::Online => "online",
            Connectivity::Offline => "offline",
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized connectivity signal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown connectivity signal: '{0}' (expected 'online' or 'offline')")]
pub struct ParseConnectivityError(String);

impl FromStr for Connectivity {
    type Err = ParseConnectivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "online" => Ok(Connectivity::Online),
            "offline" => Ok(Connectivity::Offline),
            other => Err(ParseConnectivityError(other.to_string())),
        }
    }
}

/// A change of connectivity state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Connectivity,
    pub to: Connectivity,
}

impl Transition {
    pub fn is_reconnect(&self) -> bool {
        self.from == Connectivity::Offline && self.to == Connectivity::Online
    }
}

/// User-visible outcome of reconnect handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    FeedbackSubmitted(ReplaySummary),
    Synchronized(SyncReport),
}

impl Notification {
    pub fn message(&self) -> String {
        match self {
            Notification::FeedbackSubmitted(summary) => summary.message(),
            Notification::Synchronized(report) => format!(
                "Offline dictionary updated: {} terms in {} categories.",
                report.terms, report.categories
            ),
        }
    }
}

struct Resync<'a, A: DictionaryApi + ?Sized, S: SettingsStore + ?Sized> {
    engine: Synchronizer<'a, A, S>,
    store: &'a mut LocalStore,
}

type TransitionHandler<'a> = Box<dyn FnMut(Transition) + 'a>;
type NotificationHandler<'a> = Box<dyn FnMut(&Notification) + 'a>;

/// Reacts to connectivity changes.
pub struct ConnectivityMonitor<'a, A: DictionaryApi + ?Sized, S: SettingsStore + ?Sized> {
    state: Connectivity,
    api: &'a A,
    queue: FeedbackQueue<'a, S>,
    resync: Option<Resync<'a, A, S>>,
    transition_handlers: Vec<TransitionHandler<'a>>,
    notification_handlers: Vec<NotificationHandler<'a>>,
}

impl<'a, A: DictionaryApi + ?Sized, S: SettingsStore + ?Sized> ConnectivityMonitor<'a, A, S> {
    /// Start in `initial`, the platform's current state. Starting online does
    /// not trigger a replay.
    pub fn new(initial: Connectivity, api: &'a A, queue: FeedbackQueue<'a, S>) -> Self {
        ConnectivityMonitor {
            state: initial,
            api,
            queue,
            resync: None,
            transition_handlers: Vec::new(),
            notification_handlers: Vec::new(),
        }
    }

    /// Also refresh `store` after each reconnect, when it is installed.
    pub fn with_resync(
        mut self,
        engine: Synchronizer<'a, A, S>,
        store: &'a mut LocalStore,
    ) -> Self {
        self.resync = Some(Resync { engine, store });
        self
    }

    pub fn state(&self) -> Connectivity {
        self.state
    }

    /// Call `handler` on every state change, before any side effect runs.
    pub fn on_transition(&mut self, handler: impl FnMut(Transition) + 'a) {
        self.transition_handlers.push(Box::new(handler));
    }

    /// Call `handler` for every user-visible notification.
    pub fn on_notification(&mut self, handler: impl FnMut(&Notification) + 'a) {
        self.notification_handlers.push(Box::new(handler));
    }

    /// Apply one platform signal.
    ///
    /// Returns the transition, or `None` if the state did not change. On a
    /// reconnect the replay (and resync) completes before this returns.
    pub async fn observe(&mut self, next: Connectivity) -> Option<Transition> {
        if next == self.state {
            return None;
        }

        let transition = Transition {
            from: self.state,
            to: next,
        };
        self.state = next;
        tracing::info!(from = %transition.from, to = %transition.to, "connectivity changed");

        for handler in &mut self.transition_handlers {
            handler(transition);
        }

        if transition.is_reconnect() {
            for notification in self.reconnected().await {
                self.notify(&notification);
            }
        }
        Some(transition)
    }

    /// Apply signals in order until every sender is dropped.
    pub async fn run(&mut self, mut signals: mpsc::Receiver<Connectivity>) {
        while let Some(signal) = signals.recv().await {
            self.observe(signal).await;
        }
        tracing::debug!("connectivity signal closed");
    }

    async fn reconnected(&mut self) -> Vec<Notification> {
        let mut notifications = Vec::new();

        match self.queue.replay_pending(self.api).await {
            Ok(summary) if summary.succeeded > 0 => {
                notifications.push(Notification::FeedbackSubmitted(summary));
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "feedback replay failed"),
        }

        if let Some(resync) = &mut self.resync {
            match OfflineQuery::new(resync.store).is_ready() {
                Ok(true) => match resync.engine.synchronize(resync.store).await {
                    Ok(report) => notifications.push(Notification::Synchronized(report)),
                    Err(e) => tracing::warn!(error = %e, "resync after reconnect failed"),
                },
                Ok(false) => tracing::debug!("replica not installed, skipping resync"),
                Err(e) => tracing::warn!(error = %e, "cannot read replica state"),
            }
        }

        notifications
    }

    fn notify(&mut self, notification: &Notification) {
        tracing::info!(message = %notification.message(), "notification");
        for handler in &mut self.notification_handlers {
            handler(notification);
        }
    }
}
