// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashMap;
use std::io::Write;

use hd_core::{Category, Language, LocalStore, OfflineQuery, Term};

use crate::cli::OutputFormat;
use crate::colors;
use crate::display::{format_term_entry, no_results_message, Highlighter};
use crate::error::Result;

use super::{effective_language, Context};

pub fn run(
    ctx: &Context,
    query: &[String],
    category: Option<i64>,
    lang: Option<Language>,
    format: OutputFormat,
) -> Result<()> {
    let settings = ctx.settings()?;
    let language = effective_language(&settings, lang)?;
    let store = ctx.open_store()?;
    run_impl(
        &store,
        &query.join(" "),
        category,
        language,
        format,
        colors::should_colorize(),
        &mut std::io::stdout(),
    )
}

/// Internal implementation that accepts store for testing.
pub(crate) fn run_impl(
    store: &LocalStore,
    query: &str,
    category: Option<i64>,
    language: Language,
    format: OutputFormat,
    colorize: bool,
    out: &mut impl Write,
) -> Result<()> {
    let engine = OfflineQuery::new(store);
    engine.ensure_ready()?;

    let query = query.trim();
    let terms = engine.search(query, category, language)?;

    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&terms)?)?;
        }
        OutputFormat::Text if terms.is_empty() => {
            writeln!(out, "{}", no_results_message(query, language))?;
        }
        OutputFormat::Text => {
            let categories: HashMap<i64, Category> = engine
                .categories()?
                .into_iter()
                .map(|c| (c.id, c))
                .collect();
            let highlighter = Highlighter::new(query, colorize);

            let noun = if terms.len() == 1 { "term" } else { "terms" };
            writeln!(out, "{} {noun} found\n", terms.len())?;
            for term in &terms {
                let badge = category_label(term, &categories, language);
                writeln!(out, "{}\n", format_term_entry(term, badge, language, &highlighter))?;
            }
        }
    }
    Ok(())
}

/// The term's embedded category name, else the stored category's name.
pub(crate) fn category_label<'t>(
    term: &'t Term,
    categories: &'t HashMap<i64, Category>,
    language: Language,
) -> Option<&'t str> {
    term.category_name(language)
        .or_else(|| categories.get(&term.category_id).map(|c| c.name(language)))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
