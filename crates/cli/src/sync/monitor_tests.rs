// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::api_tests::MockApi;
use super::engine::Synchronizer;
use super::monitor::{Connectivity, ConnectivityMonitor, Notification, Transition};
use super::queue::FeedbackQueue;
use super::test_helpers::{category, feedback, sample_listing, term};
use hd_core::{Collection, LocalStore, MemorySettings, Term};
use std::cell::RefCell;
use tokio::sync::mpsc;
use yare::parameterized;

use Connectivity::{Offline, Online};

fn queue_with<'a>(
    settings: &'a MemorySettings,
    comments: &[&str],
) -> FeedbackQueue<'a, MemorySettings> {
    let queue = FeedbackQueue::new(settings);
    for comment in comments {
        queue.enqueue(feedback(comment)).unwrap();
    }
    queue
}

#[parameterized(
    online = { "online", Online },
    offline = { "offline", Offline },
    mixed_case = { " Online\n", Online },
)]
fn test_parse_connectivity(input: &str, expected: Connectivity) {
    assert_eq!(input.parse::<Connectivity>().unwrap(), expected);
}

#[test]
fn test_parse_connectivity_rejects_unknown() {
    let err = "maybe".parse::<Connectivity>().unwrap_err();
    assert!(err.to_string().contains("maybe"));
}

#[tokio::test]
async fn test_identical_signal_is_ignored() {
    let api = MockApi::new();
    let settings = MemorySettings::new();
    let mut monitor = ConnectivityMonitor::new(Online, &api, queue_with(&settings, &["a"]));

    assert_eq!(monitor.observe(Online).await, None);
    assert_eq!(monitor.state(), Online);
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn test_going_offline_has_no_side_effect() {
    let api = MockApi::new();
    let settings = MemorySettings::new();
    let mut monitor = ConnectivityMonitor::new(Online, &api, queue_with(&settings, &["a"]));

    let transition = monitor.observe(Offline).await.unwrap();

    assert_eq!(transition, Transition { from: Online, to: Offline });
    assert!(!transition.is_reconnect());
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn test_reconnect_replays_once_and_notifies() {
    let api = MockApi::new();
    let settings = MemorySettings::new();
    let messages = RefCell::new(Vec::new());
    let mut monitor = ConnectivityMonitor::new(Offline, &api, queue_with(&settings, &["a", "b"]));
    monitor.on_notification(|n| messages.borrow_mut().push(n.message()));

    let transition = monitor.observe(Online).await.unwrap();

    assert!(transition.is_reconnect());
    assert_eq!(api.calls(), 2);
    assert_eq!(api.submitted().len(), 2);
    assert_eq!(
        *messages.borrow(),
        vec!["Submitted 2 of 2 pending feedback items.".to_string()]
    );
    drop(monitor);
    assert!(FeedbackQueue::new(&settings).is_empty().unwrap());
}

#[tokio::test]
async fn test_no_notification_when_nothing_delivered() {
    let api = MockApi::new();
    api.reject_comment("a");
    let settings = MemorySettings::new();
    let notified = RefCell::new(0);
    let mut monitor = ConnectivityMonitor::new(Offline, &api, queue_with(&settings, &["a"]));
    monitor.on_notification(|_| *notified.borrow_mut() += 1);

    monitor.observe(Online).await;

    assert_eq!(api.calls(), 1);
    assert_eq!(*notified.borrow(), 0);
}

#[tokio::test]
async fn test_starting_online_does_not_replay() {
    let api = MockApi::new();
    let settings = MemorySettings::new();
    let monitor = ConnectivityMonitor::new(Online, &api, queue_with(&settings, &["a"]));

    assert_eq!(monitor.state(), Online);
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn test_transition_handlers_see_every_change() {
    let api = MockApi::new();
    let settings = MemorySettings::new();
    let seen = RefCell::new(Vec::new());
    let mut monitor = ConnectivityMonitor::new(Online, &api, FeedbackQueue::new(&settings));
    monitor.on_transition(|t| seen.borrow_mut().push(t));

    for signal in [Offline, Offline, Online, Online, Offline] {
        monitor.observe(signal).await;
    }

    assert_eq!(
        *seen.borrow(),
        vec![
            Transition { from: Online, to: Offline },
            Transition { from: Offline, to: Online },
            Transition { from: Online, to: Offline },
        ]
    );
}

#[tokio::test]
async fn test_run_retries_only_on_next_reconnect() {
    let api = MockApi::new();
    api.set_offline(true);
    let settings = MemorySettings::new();
    let mut monitor = ConnectivityMonitor::new(Online, &api, queue_with(&settings, &["a"]));

    let (tx, rx) = mpsc::channel(8);
    for signal in [Offline, Online, Online, Offline, Online] {
        tx.send(signal).await.unwrap();
    }
    drop(tx);
    monitor.run(rx).await;

    assert_eq!(monitor.state(), Online);
    assert_eq!(api.calls(), 2);
    drop(monitor);
    assert_eq!(FeedbackQueue::new(&settings).len().unwrap(), 1);
}

#[tokio::test]
async fn test_resync_on_reconnect_refreshes_installed_replica() {
    let (categories, terms) = sample_listing();
    let api = MockApi::serving(categories, terms.clone());
    let settings = MemorySettings::new();
    let mut store = LocalStore::open_in_memory().unwrap();
    store
        .write(|tx| {
            tx.replace_all(&[category(9, "Old", "Xoxo")])?;
            tx.replace_all(&[term(90, "Old", "Xoxo", 9)])
        })
        .unwrap();

    let messages = RefCell::new(Vec::new());
    let mut monitor = ConnectivityMonitor::new(Offline, &api, FeedbackQueue::new(&settings))
        .with_resync(Synchronizer::new(&api, &settings), &mut store);
    monitor.on_notification(|n| messages.borrow_mut().push(n.clone()));

    monitor.observe(Online).await;
    drop(monitor);

    assert_eq!(store.get_all::<Term>().unwrap(), terms);
    let messages = messages.into_inner();
    assert_eq!(messages.len(), 1);
    assert!(matches!(&messages[0], Notification::Synchronized(report) if report.terms == 3));
}

#[tokio::test]
async fn test_resync_skipped_when_not_installed() {
    let (categories, terms) = sample_listing();
    let api = MockApi::serving(categories, terms);
    let settings = MemorySettings::new();
    let mut store = LocalStore::open_in_memory().unwrap();

    let mut monitor = ConnectivityMonitor::new(Offline, &api, FeedbackQueue::new(&settings))
        .with_resync(Synchronizer::new(&api, &settings), &mut store);
    monitor.observe(Online).await;
    drop(monitor);

    assert_eq!(api.calls(), 0);
    assert_eq!(store.count(Collection::Terms).unwrap(), 0);
}

#[tokio::test]
async fn test_resync_failure_is_not_propagated() {
    let api = MockApi::new();
    api.fail_terms();
    let settings = MemorySettings::new();
    let mut store = LocalStore::open_in_memory().unwrap();
    store.replace_all(&[term(1, "Kept", "Kept", 1)]).unwrap();

    let mut monitor = ConnectivityMonitor::new(Offline, &api, FeedbackQueue::new(&settings))
        .with_resync(Synchronizer::new(&api, &settings), &mut store);
    let transition = monitor.observe(Online).await;
    assert!(transition.is_some());
    assert_eq!(monitor.state(), Online);
    drop(monitor);

    assert_eq!(store.get_all::<Term>().unwrap()[0].term_en, "Kept");
}
