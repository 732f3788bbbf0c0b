// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Combining model confidence with lexicon polarity

use serde::{Deserialize, Serialize};
use std::fmt;

use super::model::ModelPrediction;
use crate::utils::math::round2;

/// Confidence below which the model's score replaces the lexicon polarity
pub const LOW_CONFIDENCE_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Sign of the lexicon polarity
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    pub polarity: f64,
}

/// Derive the reported sentiment
///
/// The label comes only from the sign of the lexicon polarity; the model's
/// label is ignored. For a Positive or Negative result whose model confidence
/// is below 0.5, the confidence itself is reported as the polarity. Otherwise
/// the lexicon polarity is reported, rounded to two decimals.
pub fn blend(prediction: &ModelPrediction, lexicon_polarity: f64) -> SentimentResult {
    let sentiment = Sentiment::from_polarity(lexicon_polarity);

    let polarity = match sentiment {
        Sentiment::Positive | Sentiment::Negative
            if prediction.score < LOW_CONFIDENCE_THRESHOLD =>
        {
            prediction.score as f64
        }
        _ => round2(lexicon_polarity),
    };

    SentimentResult {
        sentiment,
        polarity,
    }
}
