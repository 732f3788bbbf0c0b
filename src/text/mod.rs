// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Article classification
//!
//! A TF-IDF vectorizer followed by multinomial naive Bayes, fit once at
//! startup on four categories of the 20 Newsgroups corpus.

pub mod classifier;
pub mod corpus;
pub mod mapping;
pub mod naive_bayes;
pub mod pipeline;
pub mod split;
pub mod tfidf;

use thiserror::Error;

pub use classifier::ArticleClassifier;
pub use corpus::{fetch_20newsgroups, Corpus, CorpusConfig, CorpusError};
pub use mapping::{CategoryMapping, ARTICLE_CATEGORIES};
pub use naive_bayes::MultinomialNb;
pub use pipeline::TextPipeline;
pub use split::{train_test_split, TrainTestSplit};
pub use tfidf::{SparseVector, TfidfVectorizer};

#[derive(Debug, Error)]
pub enum TextError {
    #[error("Cannot fit on an empty corpus")]
    EmptyCorpus,

    #[error("Empty vocabulary: documents contain no tokens")]
    EmptyVocabulary,

    #[error("Got {documents} documents but {targets} targets")]
    LengthMismatch { documents: usize, targets: usize },

    #[error("Target {target} is out of range for {classes} classes")]
    UnknownTarget { target: usize, classes: usize },

    #[error("Invalid train/test split: {0}")]
    InvalidSplit(String),

    #[error("No display name for category '{0}'")]
    UnknownCategory(String),

    #[error("Fitted categories {actual:?} do not match mapping keys {expected:?}")]
    MappingMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("Invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),
}
