// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use hd_core::{Language, SettingsExt, SettingsStore};

use crate::error::Result;

use super::Context;

pub fn run(ctx: &Context, language: Option<Language>, toggle: bool) -> Result<()> {
    let settings = ctx.settings()?;
    run_impl(&settings, language, toggle, &mut std::io::stdout())
}

/// Print the preference, or store a new one and print that.
pub(crate) fn run_impl<S: SettingsStore + ?Sized>(
    settings: &S,
    language: Option<Language>,
    toggle: bool,
    out: &mut impl Write,
) -> Result<()> {
    let next = match (language, toggle) {
        (Some(language), _) => Some(language),
        (None, true) => Some(settings.language()?.toggled()),
        (None, false) => None,
    };

    if let Some(language) = next {
        settings.set_language(language)?;
    }
    writeln!(out, "{}", settings.language()?)?;
    Ok(())
}

#[cfg(test)]
#[path = "lang_tests.rs"]
mod tests;
