// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

/// Strip all ANSI escape sequences from a string.
fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[test]
fn commands_lists_every_subcommand() {
    let text = strip_ansi(&commands());
    for name in [
        "search", "show", "categories", "lang", "install", "sync", "status", "feedback",
        "pending", "replay", "watch", "completion",
    ] {
        assert!(
            text.lines().any(|line| line.trim_start().starts_with(name)),
            "missing {name}"
        );
    }
}

#[test]
fn template_has_placeholders() {
    let text = strip_ansi(&template());
    assert!(text.contains("{usage}"));
    assert!(text.contains("{options}"));
    assert!(text.contains("Options:"));
}

#[test]
fn quickstart_mentions_install() {
    assert!(strip_ansi(&quickstart()).contains("hdict install"));
}
