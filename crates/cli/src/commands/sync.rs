// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use hd_core::{LocalStore, SettingsStore};

use crate::config::store_path;
use crate::error::Result;
use crate::sync::{DictionaryApi, SyncError, SyncReport, Synchronizer};

use super::{runtime, Context};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncKind {
    Install,
    Refresh,
}

pub fn run(ctx: &Context, kind: SyncKind) -> Result<()> {
    let api = ctx.api()?;
    let settings = ctx.settings()?;
    let mut store = open_sync_store(&store_path(&ctx.data_dir))?;
    run_impl(
        &api,
        &settings,
        &mut store,
        &ctx.data_dir,
        kind,
        &mut std::io::stdout(),
    )
}

/// Opens the store with failures reported as sync errors.
pub(crate) fn open_sync_store(path: &Path) -> Result<LocalStore> {
    LocalStore::open(path).map_err(|e| SyncError::from(e).into())
}

/// Internal implementation that accepts its collaborators for testing.
pub(crate) fn run_impl<A: DictionaryApi + ?Sized, S: SettingsStore + ?Sized>(
    api: &A,
    settings: &S,
    store: &mut LocalStore,
    lock_dir: &Path,
    kind: SyncKind,
    out: &mut impl Write,
) -> Result<()> {
    let engine = Synchronizer::new(api, settings).with_lock_dir(lock_dir);
    let report = runtime()?.block_on(engine.synchronize(store))?;
    writeln!(out, "{}", summary(&report, kind))?;
    Ok(())
}

fn summary(report: &SyncReport, kind: SyncKind) -> String {
    let verb = match kind {
        SyncKind::Install => "installed",
        SyncKind::Refresh => "updated",
    };
    format!(
        "Offline dictionary {verb}: {} terms in {} categories.",
        report.terms, report.categories
    )
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
