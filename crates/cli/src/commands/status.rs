// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use chrono::{DateTime, Utc};
use hd_core::{Collection, Language, LocalStore, SettingsExt, SettingsStore};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::display::format_last_sync;
use crate::error::Result;
use crate::sync::FeedbackQueue;

use super::Context;

#[derive(Debug, Serialize)]
struct Status {
    installed: bool,
    last_sync: Option<DateTime<Utc>>,
    terms: usize,
    categories: usize,
    pending_feedback: usize,
    language: Language,
    server_url: String,
}

pub fn run(ctx: &Context, format: OutputFormat) -> Result<()> {
    let settings = ctx.settings()?;
    let store = ctx.open_store()?;
    run_impl(
        &store,
        &settings,
        &ctx.config.server_url,
        format,
        &mut std::io::stdout(),
    )
}

/// Internal implementation that accepts store and settings for testing.
pub(crate) fn run_impl<S: SettingsStore + ?Sized>(
    store: &LocalStore,
    settings: &S,
    server_url: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let status = Status {
        installed: settings.is_installed()?,
        last_sync: settings.last_sync()?,
        terms: store.count(Collection::Terms)?,
        categories: store.count(Collection::Categories)?,
        pending_feedback: FeedbackQueue::new(settings).len()?,
        language: settings.language()?,
        server_url: server_url.to_string(),
    };

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&status)?)?,
        OutputFormat::Text => {
            let installed = if status.installed { "yes" } else { "no" };
            writeln!(out, "Installed:        {installed}")?;
            writeln!(out, "Last sync:        {}", format_last_sync(status.last_sync))?;
            writeln!(out, "Terms:            {}", status.terms)?;
            writeln!(out, "Categories:       {}", status.categories)?;
            writeln!(out, "Pending feedback: {}", status.pending_feedback)?;
            writeln!(out, "Language:         {}", status.language)?;
            writeln!(out, "Server:           {}", status.server_url)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
