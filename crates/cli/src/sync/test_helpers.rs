// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for sync module tests.

use hd_core::{Category, FeedbackRecord, Term};

pub fn category(id: i64, name_en: &str, name_ewe: &str) -> Category {
    Category {
        id,
        name_en: name_en.to_string(),
        name_ewe: name_ewe.to_string(),
    }
}

pub fn term(id: i64, term_en: &str, term_ewe: &str, category_id: i64) -> Term {
    Term {
        id,
        term_en: term_en.to_string(),
        term_ewe: term_ewe.to_string(),
        definition_en: format!("Definition of {term_en}"),
        definition_ewe: format!("{term_ewe} gɔmeɖeɖe"),
        category_id,
        category_name_en: None,
        category_name_ewe: None,
    }
}

/// Two categories and three terms.
pub fn sample_listing() -> (Vec<Category>, Vec<Term>) {
    (
        vec![category(1, "Diseases", "Dɔlélewo"), category(2, "Anatomy", "Ŋutilã")],
        vec![
            term(10, "Malaria", "Asrã", 1),
            term(11, "Fever", "Ŋdɔ", 1),
            term(12, "Heart", "Dzi", 2),
        ],
    )
}

pub fn feedback(comment: &str) -> FeedbackRecord {
    FeedbackRecord::new()
        .with("term_id", "10")
        .with("feedback_type", "correction")
        .with("comment", comment)
}
