// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offline search over the local replica.
//!
//! Filtering is done in memory: load every term, keep those in the requested
//! category, then keep those whose name or definition in the selected
//! language contains the query, case-insensitively. Results stay in store
//! order; there is no ranking.

use crate::error::{Error, Result};
use crate::store::{Collection, LocalStore};
use crate::term::{Category, Language, Term};

/// Read-only query access to a [`LocalStore`].
pub struct OfflineQuery<'a> {
    store: &'a LocalStore,
}

impl<'a> OfflineQuery<'a> {
    pub fn new(store: &'a LocalStore) -> Self {
        OfflineQuery { store }
    }

    /// True iff the replica holds at least one term.
    pub fn is_ready(&self) -> Result<bool> {
        Ok(self.store.count(Collection::Terms)? > 0)
    }

    /// Fails with [`Error::NotInstalled`] unless [`is_ready`](Self::is_ready).
    pub fn ensure_ready(&self) -> Result<()> {
        if self.is_ready()? {
            Ok(())
        } else {
            Err(Error::NotInstalled)
        }
    }

    /// Search terms by text and optional category.
    ///
    /// An empty `query` matches every term.
    pub fn search(
        &self,
        query: &str,
        category: Option<i64>,
        language: Language,
    ) -> Result<Vec<Term>> {
        let terms = self.store.get_all::<Term>()?;
        Ok(filter_terms(terms, query, category, language))
    }

    pub fn get_by_id(&self, id: i64) -> Result<Term> {
        self.store.get_by_id(id)
    }

    /// All categories in store order.
    pub fn categories(&self) -> Result<Vec<Category>> {
        self.store.get_all()
    }

    /// The category a term points at, or `None` if it does not resolve.
    pub fn category_for(&self, term: &Term) -> Result<Option<Category>> {
        match self.store.get_by_id::<Category>(term.category_id) {
            Ok(category) => Ok(Some(category)),
            Err(Error::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Apply the category and text filters to `terms`, preserving order.
pub fn filter_terms(
    mut terms: Vec<Term>,
    query: &str,
    category: Option<i64>,
    language: Language,
) -> Vec<Term> {
    if let Some(category_id) = category {
        terms.retain(|term| term.category_id == category_id);
    }

    if !query.is_empty() {
        let needle = query.to_lowercase();
        terms.retain(|term| term.matches_lowercase(&needle, language));
    }

    terms
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
