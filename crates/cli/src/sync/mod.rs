// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server synchronization for the offline dictionary.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌─────────────┐
//! │ Synchronizer │────►│ DictionaryApi │────►│   Server    │
//! │  (replica)   │     │    (trait)    │◄────│  /api/...   │
//! └──────────────┘     └───────────────┘     └─────────────┘
//!        ▲                     ▲
//!        │                     │
//! ┌──────────────┐     ┌───────────────┐
//! │ Connectivity │────►│ FeedbackQueue │  (pending feedback)
//! │   Monitor    │     └───────────────┘
//! └──────────────┘
//! ```
//!
//! The API is injected everywhere, so every component can be driven by a
//! mock in tests.

mod api;
mod engine;
mod monitor;
mod queue;

pub use api::{ApiError, ApiResult, DictionaryApi, HttpApi};
pub use engine::{SyncError, SyncReport, Synchronizer};
pub use monitor::{
    Connectivity, ConnectivityMonitor, Notification, ParseConnectivityError, Transition,
};
pub use queue::{
    Delivery, FeedbackQueue, QueueError, ReplayError, ReplayHook, ReplaySummary, REPLAY_TAG,
};

#[cfg(test)]
mod test_helpers;



#[cfg(test)]
mod monitor_tests;
