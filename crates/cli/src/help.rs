// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_dictionary}
  {search}      Search the offline dictionary
  {show}        Show one term
  {categories}  List categories
  {lang}        Print, set, or toggle the language

{header_offline}
  {install}     Download the dictionary for offline use
  {sync}        Refresh the offline dictionary
  {status}      Show offline data status
  {feedback}    Send feedback, queueing it when offline
  {pending}     List queued feedback
  {replay}      Submit queued feedback
  {watch}       Follow connectivity changes from stdin
  {completion}  Generate shell completions
",
        header_dictionary = colors::header("Dictionary:"),
        header_offline = colors::header("Offline & Sync:"),
        search = colors::literal("search"),
        show = colors::literal("show"),
        categories = colors::literal("categories"),
        lang = colors::literal("lang"),
        install = colors::literal("install"),
        sync = colors::literal("sync"),
        status = colors::literal("status"),
        feedback = colors::literal("feedback"),
        pending = colors::literal("pending"),
        replay = colors::literal("replay"),
        watch = colors::literal("watch"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  hdict install            Download the dictionary (needs a connection)
  hdict search malaria     Search offline
  hdict lang ewe           Show Ewe names and definitions
  hdict feedback -f term_id=4 -f comment=\"...\"   Send feedback",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
