// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! TF-IDF + multinomial naive Bayes text pipeline

use tracing::info;

use super::naive_bayes::MultinomialNb;
use super::tfidf::TfidfVectorizer;
use super::TextError;

/// Vectorizer followed by a classifier, fit once and then read-only
#[derive(Debug, Clone)]
pub struct TextPipeline {
    vectorizer: TfidfVectorizer,
    classifier: MultinomialNb,
    target_names: Vec<String>,
}

impl TextPipeline {
    /// Fit the pipeline on labelled documents
    ///
    /// `targets[i]` indexes into `target_names`.
    pub fn fit(
        documents: &[String],
        targets: &[usize],
        target_names: Vec<String>,
    ) -> Result<Self, TextError> {
        if documents.is_empty() {
            return Err(TextError::EmptyCorpus);
        }
        if documents.len() != targets.len() {
            return Err(TextError::LengthMismatch {
                documents: documents.len(),
                targets: targets.len(),
            });
        }

        let mut vectorizer = TfidfVectorizer::new()?;
        let rows = vectorizer.fit_transform(documents)?;

        let mut classifier = MultinomialNb::default();
        classifier.fit(
            &rows,
            targets,
            target_names.len(),
            vectorizer.vocabulary_size(),
        )?;

        info!(
            "Text pipeline fit on {} documents ({} terms, {} classes)",
            documents.len(),
            vectorizer.vocabulary_size(),
            target_names.len()
        );

        Ok(Self {
            vectorizer,
            classifier,
            target_names,
        })
    }

    /// Predicted class index per document, in input order
    pub fn predict(&self, documents: &[String]) -> Vec<usize> {
        documents
            .iter()
            .map(|doc| self.classifier.predict(&self.vectorizer.transform(doc)))
            .collect()
    }

    /// Predicted training category name per document, in input order
    pub fn predict_names(&self, documents: &[String]) -> Vec<&str> {
        self.predict(documents)
            .into_iter()
            .map(|index| self.target_names[index].as_str())
            .collect()
    }

    /// Fraction of documents whose prediction matches the target
    pub fn score(&self, documents: &[String], targets: &[usize]) -> f64 {
        if documents.is_empty() {
            return 0.0;
        }
        let correct = self
            .predict(documents)
            .iter()
            .zip(targets)
            .filter(|(predicted, expected)| predicted == expected)
            .count();
        correct as f64 / documents.len() as f64
    }

    pub fn target_names(&self) -> &[String] {
        &self.target_names
    }
}
