// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Sentiment analysis
//!
//! A pretrained transformer gives a label and confidence, a word lexicon
//! gives a signed polarity, and `blend` turns both into the reported result.

pub mod analyzer;
pub mod blend;
pub mod lexicon;
pub mod model;

use std::fmt::Display;
use thiserror::Error;

pub use analyzer::SentimentAnalyzer;
pub use blend::{blend, Sentiment, SentimentResult, LOW_CONFIDENCE_THRESHOLD};
pub use lexicon::{Lexicon, LexiconEntry, LexiconScore};
pub use model::{ModelPrediction, OnnxSentimentModel, SentimentModel, MAX_SEQUENCE_LENGTH};

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("Sentiment model file not found: {0}")]
    ModelNotFound(String),

    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    #[error("Sentiment inference failed: {0}")]
    Runtime(String),

    #[error("Invalid lexicon: {0}")]
    Lexicon(String),

    #[error("Invalid word pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl SentimentError {
    pub(crate) fn runtime(err: impl Display) -> Self {
        SentimentError::Runtime(err.to_string())
    }
}
