// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! TF-IDF vectorization with sparse rows

use regex::Regex;
use std::collections::{BTreeSet, HashMap};

use super::TextError;

/// Two or more word characters, Unicode aware
pub const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Sparse row: `(feature index, value)` pairs sorted by index
pub type SparseVector = Vec<(usize, f64)>;

/// Lowercase `text` and split it into tokens
pub fn tokenize(pattern: &Regex, text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    pattern
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Term-frequency / inverse-document-frequency vectorizer
///
/// - term frequency is the raw count of a token in the document
/// - idf is smoothed: `ln((1 + n) / (1 + df)) + 1`
/// - every row is L2-normalized; rows with no known terms stay empty
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    token_pattern: Regex,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn new() -> Result<Self, TextError> {
        Ok(Self {
            token_pattern: Regex::new(TOKEN_PATTERN)?,
            vocabulary: HashMap::new(),
            idf: Vec::new(),
        })
    }

    /// Learn the vocabulary and idf weights, then transform the documents
    pub fn fit_transform(&mut self, documents: &[String]) -> Result<Vec<SparseVector>, TextError> {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenize(&self.token_pattern, doc))
            .collect();

        // Sorted vocabulary keeps feature indices stable across runs
        let terms: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        if terms.is_empty() {
            return Err(TextError::EmptyVocabulary);
        }
        self.vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(index, term)| (term.to_string(), index))
            .collect();

        let mut document_frequency = vec![0usize; self.vocabulary.len()];
        for tokens in &tokenized {
            let unique: BTreeSet<usize> = tokens
                .iter()
                .filter_map(|t| self.vocabulary.get(t).copied())
                .collect();
            for index in unique {
                document_frequency[index] += 1;
            }
        }

        let n = documents.len() as f64;
        self.idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Ok(tokenized.iter().map(|tokens| self.weigh(tokens)).collect())
    }

    /// Transform one document with the fitted vocabulary
    pub fn transform(&self, document: &str) -> SparseVector {
        let tokens = tokenize(&self.token_pattern, document);
        self.weigh(&tokens)
    }

    fn weigh(&self, tokens: &[String]) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokens {
            if let Some(&index) = self.vocabulary.get(token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut row: SparseVector = counts
            .into_iter()
            .map(|(index, count)| (index, count * self.idf[index]))
            .collect();
        row.sort_by_key(|(index, _)| *index);

        let norm = row.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, value) in &mut row {
                *value /= norm;
            }
        }
        row
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn feature_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}
