// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::borrow::Cow;

use chrono::{DateTime, Local, Utc};
use hd_core::{Category, Language, PendingFeedback, Term};
use regex::{Regex, RegexBuilder};

use crate::colors;

/// Definitions in result lists are cut to this many characters.
pub const PREVIEW_CHARS: usize = 100;

/// Queries shorter than this are not highlighted.
const MIN_HIGHLIGHT_CHARS: usize = 3;

/// Maximum line width for wrapped definitions (excluding indent).
const WRAP_WIDTH: usize = 76;

/// Shorten `text` to `max` characters, marking the cut with `...`.
pub fn truncate(text: &str, max: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// Wrap text at word boundaries, preserving explicit line breaks.
pub fn wrap_text(content: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in content.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        lines.push(current);
    }
    lines
}

/// Marks case-insensitive occurrences of the search query.
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    /// Highlight `query` when `enabled` and the query is long enough.
    pub fn new(query: &str, enabled: bool) -> Self {
        let pattern = (enabled && query.chars().count() >= MIN_HIGHLIGHT_CHARS)
            .then(|| {
                RegexBuilder::new(&regex::escape(query))
                    .case_insensitive(true)
                    .build()
                    .ok()
            })
            .flatten();
        Highlighter { pattern }
    }

    pub fn disabled() -> Self {
        Highlighter { pattern: None }
    }

    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.pattern {
            Some(re) => {
                re.replace_all(text, |caps: &regex::Captures<'_>| colors::matched(&caps[0]))
            }
            None => Cow::Borrowed(text),
        }
    }
}

/// Labels for the English and Ewe definitions, in the interface language.
pub fn definition_labels(language: Language) -> (&'static str, &'static str) {
    match language {
        Language::En => ("English", "Ewe"),
        Language::Ewe => ("Yevugbe", "Eʋegbe"),
    }
}

/// Three-line search result: name with category badge, then both
/// definitions truncated.
pub fn format_term_entry(
    term: &Term,
    category: Option<&str>,
    language: Language,
    highlighter: &Highlighter,
) -> String {
    let (en_label, ewe_label) = definition_labels(language);
    let name = highlighter.apply(term.name(language));
    let mut first = format!("{name}  (#{})", term.id);
    if let Some(category) = category {
        first.push_str(&format!("  [{}]", highlighter.apply(category)));
    }

    format!(
        "{first}\n  {en_label}: {}\n  {ewe_label}: {}",
        highlighter.apply(&truncate(&term.definition_en, PREVIEW_CHARS)),
        highlighter.apply(&truncate(&term.definition_ewe, PREVIEW_CHARS)),
    )
}

/// Full detail view for one term.
pub fn format_term_details(term: &Term, category: Option<&str>, language: Language) -> String {
    let (en_label, ewe_label) = definition_labels(language);
    let mut lines = vec![
        format!("{} / {}", term.term_en, term.term_ewe),
        format!("ID: {}", term.id),
    ];
    if let Some(category) = category {
        lines.push(format!("Category: {category}"));
    }
    let definitions = [
        (en_label, &term.definition_en),
        (ewe_label, &term.definition_ewe),
    ];
    for (label, definition) in definitions {
        lines.push(String::new());
        lines.push(format!("{label}:"));
        for line in wrap_text(definition, WRAP_WIDTH) {
            lines.push(format!("    {line}"));
        }
    }
    lines.join("\n")
}

pub fn format_category_line(category: &Category, language: Language) -> String {
    format!("{:>4}  {}", category.id, category.name(language))
}

/// One queued feedback item: id prefix, enqueue time, then the fields.
pub fn format_pending_line(item: &PendingFeedback) -> String {
    let id = item.id.to_string();
    let fields = item
        .fields
        .iter()
        .map(|(k, v)| format!("{k}={}", truncate(v, 40)))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{}  {}  {fields}",
        &id[..8],
        item.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M")
    )
}

pub fn format_last_sync(last_sync: Option<DateTime<Utc>>) -> String {
    match last_sync {
        Some(at) => at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => "never".to_string(),
    }
}

/// Message shown when a search matches nothing.
pub fn no_results_message(query: &str, language: Language) -> String {
    match language {
        Language::En => format!(
            "No results found for \"{query}\". Try a different search term or category."
        ),
        Language::Ewe => format!(
            "Nyagbɔgblɔ aɖeke medo ɖe \"{query}\" ŋu o. Di nyagbɔgblɔ bubu alo ɖoƒe bubu."
        ),
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
