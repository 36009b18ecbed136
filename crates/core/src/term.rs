// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dictionary records replicated from the server.
//!
//! [`Term`] and [`Category`] are read-only on the client: each sync replaces
//! them wholesale. [`Language`] selects which half of a bilingual record is
//! displayed or searched.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Display and search language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Ewe.
    Ewe,
}

impl Language {
    /// Returns the code used in settings and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ewe => "ewe",
        }
    }

    /// Returns the other language.
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ewe,
            Language::Ewe => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ewe" => Ok(Language::Ewe),
            _ => Err(Error::InvalidLanguage(s.to_string())),
        }
    }
}

/// Treats JSON `null` as an empty string.
fn nullable_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A bilingual dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: i64,
    pub term_en: String,
    pub term_ewe: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub definition_en: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub definition_ewe: String,
    /// Not guaranteed to resolve to a stored [`Category`].
    pub category_id: i64,
    /// Denormalized category name, present when the server embeds it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name_ewe: Option<String>,
}

impl Term {
    /// Term name in the given language.
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::En => &self.term_en,
            Language::Ewe => &self.term_ewe,
        }
    }

    /// Definition in the given language.
    pub fn definition(&self, language: Language) -> &str {
        match language {
            Language::En => &self.definition_en,
            Language::Ewe => &self.definition_ewe,
        }
    }

    /// Embedded category name in the given language, if the server sent one.
    pub fn category_name(&self, language: Language) -> Option<&str> {
        match language {
            Language::En => self.category_name_en.as_deref(),
            Language::Ewe => self.category_name_ewe.as_deref(),
        }
    }

    /// Returns true if the name or definition in `language` contains
    /// `needle_lower`, which must already be lowercased.
    pub fn matches_lowercase(&self, needle_lower: &str, language: Language) -> bool {
        self.name(language).to_lowercase().contains(needle_lower)
            || self.definition(language).to_lowercase().contains(needle_lower)
    }
}

/// A bilingual grouping label for terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name_en: String,
    pub name_ewe: String,
}

impl Category {
    /// Category name in the given language.
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::En => &self.name_en,
            Language::Ewe => &self.name_ewe,
        }
    }
}

#[cfg(test)]
#[path = "term_tests.rs"]
mod tests;
