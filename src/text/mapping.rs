// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Display names for the article categories

use std::collections::BTreeSet;

use super::TextError;

/// Newsgroup categories the article classifier is trained on
pub const ARTICLE_CATEGORIES: [&str; 4] = [
    "sci.space",
    "rec.sport.baseball",
    "talk.politics.mideast",
    "comp.graphics",
];

const ARTICLE_DISPLAY_NAMES: [(&str, &str); 4] = [
    ("sci.space", "Science - Space"),
    ("rec.sport.baseball", "Recreational Sports - Baseball"),
    ("talk.politics.mideast", "Politics - Middle East"),
    ("comp.graphics", "Computer Science - Graphics"),
];

/// Fixed, immutable table from training category to display string
#[derive(Debug, Clone, Copy)]
pub struct CategoryMapping {
    entries: &'static [(&'static str, &'static str)],
}

impl Default for CategoryMapping {
    fn default() -> Self {
        Self::articles()
    }
}

impl CategoryMapping {
    /// The four newsgroup categories served by `/predict`
    pub fn articles() -> Self {
        Self {
            entries: &ARTICLE_DISPLAY_NAMES,
        }
    }

    pub fn display_name(&self, category: &str) -> Result<&'static str, TextError> {
        self.entries
            .iter()
            .find(|(key, _)| *key == category)
            .map(|(_, display)| *display)
            .ok_or_else(|| TextError::UnknownCategory(category.to_string()))
    }

    pub fn categories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Check that a fitted label set is exactly this mapping's key set
    pub fn validate(&self, target_names: &[String]) -> Result<(), TextError> {
        let expected: BTreeSet<&str> = self.categories().collect();
        let actual: BTreeSet<&str> = target_names.iter().map(String::as_str).collect();
        if expected != actual || target_names.len() != expected.len() {
            return Err(TextError::MappingMismatch {
                expected: expected.into_iter().map(str::to_string).collect(),
                actual: target_names.to_vec(),
            });
        }
        Ok(())
    }
}
