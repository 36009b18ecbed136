// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use hd_core::{Category, Language, LocalStore, OfflineQuery, Term};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::display::format_term_details;
use crate::error::Result;

use super::{effective_language, Context};

#[derive(Serialize)]
struct TermDetails {
    #[serde(flatten)]
    term: Term,
    category: Option<Category>,
}

pub fn run(ctx: &Context, id: i64, lang: Option<Language>, format: OutputFormat) -> Result<()> {
    let settings = ctx.settings()?;
    let language = effective_language(&settings, lang)?;
    let store = ctx.open_store()?;
    run_impl(&store, id, language, format, &mut std::io::stdout())
}

/// Internal implementation that accepts store for testing.
pub(crate) fn run_impl(
    store: &LocalStore,
    id: i64,
    language: Language,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let engine = OfflineQuery::new(store);
    engine.ensure_ready()?;

    let term = engine.get_by_id(id)?;
    let category = engine.category_for(&term)?;

    match format {
        OutputFormat::Json => {
            let details = TermDetails { term, category };
            writeln!(out, "{}", serde_json::to_string_pretty(&details)?)?;
        }
        OutputFormat::Text => {
            let label = term
                .category_name(language)
                .or_else(|| category.as_ref().map(|c| c.name(language)));
            writeln!(out, "{}", format_term_details(&term, label, language))?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
