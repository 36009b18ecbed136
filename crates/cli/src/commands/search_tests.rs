// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::{capture, TestContext};
use crate::error::Error;
use yare::parameterized;

fn search(ctx: &TestContext, query: &str, category: Option<i64>, language: Language) -> String {
    capture(|out| run_impl(&ctx.store, query, category, language, OutputFormat::Text, false, out))
}

#[test]
fn search_before_install_is_not_installed() {
    let ctx = TestContext::new();
    let mut out = Vec::new();

    let err = run_impl(&ctx.store, "fever", None, Language::En, OutputFormat::Text, false, &mut out)
        .unwrap_err();

    assert!(matches!(err, Error::Core(hd_core::Error::NotInstalled)));
    assert!(out.is_empty());
}

#[test]
fn empty_query_lists_everything() {
    let ctx = TestContext::installed();
    let output = search(&ctx, "", None, Language::En);

    assert!(output.starts_with("3 terms found\n"));
    let malaria = output.find("Malaria").unwrap();
    let heart = output.find("Heart").unwrap();
    assert!(malaria < heart);
}

#[parameterized(
    name = { "malaria", "Malaria" },
    definition = { "PUMPS", "Heart" },
    padded = { "  fever  ", "Fever" },
)]
fn query_matches_name_or_definition(query: &str, expected: &str) {
    let ctx = TestContext::installed();
    let output = search(&ctx, query, None, Language::En);
    assert!(output.contains(expected), "{query:?} should find {expected}");
}

#[test]
fn single_result_uses_singular() {
    let ctx = TestContext::installed();
    assert!(search(&ctx, "pumps", None, Language::En).starts_with("1 term found\n"));
}

#[test]
fn category_filter_narrows_results() {
    let ctx = TestContext::installed();
    let output = search(&ctx, "", Some(2), Language::En);

    assert!(output.starts_with("1 term found"));
    assert!(output.contains("Heart  (#12)  [Anatomy]"));
}

#[test]
fn category_badge_falls_back_to_stored_category() {
    let ctx = TestContext::installed();
    let output = search(&ctx, "temperature", None, Language::En);
    assert!(output.contains("Fever  (#11)  [Diseases]"));
}

#[test]
fn ewe_search_uses_ewe_fields() {
    let ctx = TestContext::installed();
    let output = search(&ctx, "asrã", None, Language::Ewe);

    assert!(output.contains("Asrã  (#10)  [Dɔlélewo]"));
    assert!(output.contains("Yevugbe: "));
    assert!(search(&ctx, "malaria", None, Language::Ewe).contains("Nyagbɔgblɔ aɖeke"));
}

#[test]
fn no_results_message() {
    let ctx = TestContext::installed();
    let output = search(&ctx, "zzz", None, Language::En);
    assert_eq!(
        output,
        "No results found for \"zzz\". Try a different search term or category.\n"
    );
}

#[test]
fn json_output_is_term_array() {
    let ctx = TestContext::installed();
    let output = capture(|out| {
        run_impl(&ctx.store, "", Some(1), Language::En, OutputFormat::Json, false, out)
    });
    let terms: Vec<Term> = serde_json::from_str(&output).unwrap();

    assert_eq!(terms.iter().map(|t| t.id).collect::<Vec<_>>(), vec![10, 11]);
}

#[test]
fn colorized_output_highlights_query() {
    let ctx = TestContext::installed();
    let output = capture(|out| {
        run_impl(&ctx.store, "fever", None, Language::En, OutputFormat::Text, true, out)
    });
    assert!(output.contains(crate::colors::codes::MATCH_START));
}
