// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `feedback`, `pending`, and `replay`.

use std::io::Write;
use std::path::Path;

use hd_core::{FeedbackRecord, SettingsStore, RESERVED_KEYS};

use crate::cli::OutputFormat;
use crate::display::format_pending_line;
use crate::error::{Error, Result};
use crate::sync::{Delivery, DictionaryApi, FeedbackQueue};

use super::{runtime, Context};

const SENT_MESSAGE: &str = "Thank you for your feedback!";
const QUEUED_MESSAGE: &str = "Feedback saved offline. Will submit when online.";

/// Parse `key=value` arguments into a record.
pub fn parse_fields(fields: &[String]) -> Result<FeedbackRecord> {
    let mut record = FeedbackRecord::new();
    for field in fields {
        let (key, value) = field
            .split_once('=')
            .ok_or_else(|| Error::InvalidField(field.clone()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::InvalidField(field.clone()));
        }
        if RESERVED_KEYS.contains(&key) {
            tracing::warn!(key, "ignoring reserved feedback field");
            continue;
        }
        record.insert(key, value);
    }
    if record.is_empty() {
        return Err(Error::EmptyFeedback);
    }
    Ok(record)
}

pub fn send(ctx: &Context, fields: &[String], offline: bool) -> Result<()> {
    let record = parse_fields(fields)?;
    let settings = ctx.settings()?;
    let api = ctx.api()?;
    send_impl(
        &api,
        &settings,
        &ctx.data_dir,
        record,
        offline,
        &mut std::io::stdout(),
    )
}

pub(crate) fn send_impl<A: DictionaryApi + ?Sized, S: SettingsStore + ?Sized>(
    api: &A,
    settings: &S,
    lock_dir: &Path,
    record: FeedbackRecord,
    offline: bool,
    out: &mut impl Write,
) -> Result<()> {
    let queue = FeedbackQueue::new(settings).with_lock_dir(lock_dir);

    let delivery = if offline {
        Delivery::Queued(queue.enqueue(record)?)
    } else {
        runtime()?.block_on(queue.submit_or_enqueue(api, record))?
    };

    match delivery {
        Delivery::Sent => writeln!(out, "{SENT_MESSAGE}")?,
        Delivery::Queued(_) => writeln!(out, "{QUEUED_MESSAGE}")?,
        Delivery::Rejected(status) => return Err(Error::FeedbackRejected(status)),
    }
    Ok(())
}

pub fn pending(ctx: &Context, format: OutputFormat) -> Result<()> {
    let settings = ctx.settings()?;
    pending_impl(&settings, format, &mut std::io::stdout())
}

pub(crate) fn pending_impl<S: SettingsStore + ?Sized>(
    settings: &S,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let items = FeedbackQueue::new(settings).pending()?;
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&items)?)?,
        OutputFormat::Text if items.is_empty() => writeln!(out, "No pending feedback.")?,
        OutputFormat::Text => {
            for item in &items {
                writeln!(out, "{}", format_pending_line(item))?;
            }
        }
    }
    Ok(())
}

pub fn replay(ctx: &Context) -> Result<()> {
    let settings = ctx.settings()?;
    let api = ctx.api()?;
    replay_impl(&api, &settings, &ctx.data_dir, &mut std::io::stdout())
}

pub(crate) fn replay_impl<A: DictionaryApi + ?Sized, S: SettingsStore + ?Sized>(
    api: &A,
    settings: &S,
    lock_dir: &Path,
    out: &mut impl Write,
) -> Result<()> {
    let queue = FeedbackQueue::new(settings).with_lock_dir(lock_dir);
    let summary = runtime()?.block_on(queue.replay_pending(api))?;

    if summary.total == 0 {
        writeln!(out, "No pending feedback.")?;
    } else {
        writeln!(out, "{}", summary.message())?;
        if summary.failed() > 0 {
            writeln!(
                out,
                "{} item(s) remain queued and will be retried when you reconnect.",
                summary.failed()
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "feedback_tests.rs"]
mod tests;
