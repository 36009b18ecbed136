// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use hd_core::{Language, LocalStore, OfflineQuery};

use crate::cli::OutputFormat;
use crate::display::format_category_line;
use crate::error::Result;

use super::{effective_language, Context};

pub fn run(ctx: &Context, lang: Option<Language>, format: OutputFormat) -> Result<()> {
    let settings = ctx.settings()?;
    let language = effective_language(&settings, lang)?;
    let store = ctx.open_store()?;
    run_impl(&store, language, format, &mut std::io::stdout())
}

pub(crate) fn run_impl(
    store: &LocalStore,
    language: Language,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let engine = OfflineQuery::new(store);
    engine.ensure_ready()?;
    let categories = engine.categories()?;

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&categories)?)?,
        OutputFormat::Text => {
            for category in &categories {
                writeln!(out, "{}", format_category_line(category, language))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "categories_tests.rs"]
mod tests;
