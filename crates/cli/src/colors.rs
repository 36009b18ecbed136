// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and result output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers and term names: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Secondary text: medium grey
    pub const CONTEXT: u8 = 245;
    /// Highlighted query matches: soft yellow
    pub const MATCH: u8 = 221;

    /// Pre-formatted ANSI escape sequences for use in tests
    pub const HEADER_START: &str = "\x1b[38;5;74m";
    pub const MATCH_START: &str = "\x1b[1;38;5;221m";
    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// Apply header color (section titles, term names) to text.
pub fn header(text: &str) -> String {
    format!("{}{}{}", fg256(codes::HEADER), text, codes::RESET)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    format!("{}{}{}", fg256(codes::LITERAL), text, codes::RESET)
}

/// Mark a query match.
pub fn matched(text: &str) -> String {
    format!("{}{}{}", codes::MATCH_START, text, codes::RESET)
}

/// Colorize an examples help block.
///
/// Lines ending in `:` become headers; in `  command    description` lines the
/// command part is shown as a literal.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                format!("{indent}{}", header(trimmed))
            } else if let Some(split) = trimmed.find("  ") {
                let (cmd, desc) = trimmed.split_at(split);
                format!("{indent}{}{desc}", literal(cmd))
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
