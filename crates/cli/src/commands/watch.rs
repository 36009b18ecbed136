// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Drive the connectivity monitor from line-oriented input.
//!
//! Each line is `online` or `offline`; any platform notifier can be piped in.
//! Blank lines are skipped and unknown lines are logged and ignored.

use std::cell::RefCell;
use std::io::Write;
use std::path::Path;

use hd_core::{LocalStore, SettingsStore};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::config::store_path;
use crate::error::Result;
use crate::sync::{Connectivity, ConnectivityMonitor, DictionaryApi, FeedbackQueue, Synchronizer};

use super::sync::open_sync_store;
use super::{runtime, Context};

/// Signals buffered between the reader and the monitor.
const SIGNAL_BUFFER: usize = 16;

pub fn run(ctx: &Context, initial: Connectivity) -> Result<()> {
    let settings = ctx.settings()?;
    let api = ctx.api()?;
    let mut store = if ctx.config.resync_on_reconnect {
        Some(open_sync_store(&store_path(&ctx.data_dir))?)
    } else {
        None
    };

    let stdin = BufReader::new(tokio::io::stdin());
    runtime()?.block_on(run_impl(
        &api,
        &settings,
        store.as_mut(),
        &ctx.data_dir,
        initial,
        stdin,
        &mut std::io::stdout(),
    ))
}

/// Internal implementation that accepts its collaborators for testing.
///
/// Passing a store enables resync after each reconnect.
pub(crate) async fn run_impl<A, S, R, W>(
    api: &A,
    settings: &S,
    store: Option<&mut LocalStore>,
    lock_dir: &Path,
    initial: Connectivity,
    input: R,
    out: &mut W,
) -> Result<()>
where
    A: DictionaryApi + ?Sized,
    S: SettingsStore + ?Sized,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let out = RefCell::new(out);
    writeln!(out.borrow_mut(), "status: {initial}")?;

    let queue = FeedbackQueue::new(settings).with_lock_dir(lock_dir);
    let mut monitor = ConnectivityMonitor::new(initial, api, queue);
    if let Some(store) = store {
        let engine = Synchronizer::new(api, settings).with_lock_dir(lock_dir);
        monitor = monitor.with_resync(engine, store);
    }
    monitor.on_transition(|t| {
        let _ = writeln!(out.borrow_mut(), "status: {}", t.to);
    });
    monitor.on_notification(|n| {
        let _ = writeln!(out.borrow_mut(), "{}", n.message());
    });

    let (tx, rx) = mpsc::channel(SIGNAL_BUFFER);
    let reader = async move {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Connectivity>() {
                Ok(signal) => {
                    if tx.send(signal).await.is_err() {
                        break;
                    }
                }
                Err(e) => tracing::warn!(error = %e, "ignoring input line"),
            }
        }
        Ok::<(), std::io::Error>(())
    };

    let (read, ()) = tokio::join!(reader, monitor.run(rx));
    read?;
    Ok(())
}

#[cfg(test)]
#[path = "watch_tests.rs"]
mod tests;
