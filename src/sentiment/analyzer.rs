// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::sync::Arc;
use tracing::debug;

use super::blend::{blend, SentimentResult};
use super::lexicon::Lexicon;
use super::model::SentimentModel;
use super::SentimentError;

/// Runs the pretrained model and the lexicon over one text and blends them
pub struct SentimentAnalyzer {
    model: Arc<dyn SentimentModel>,
    lexicon: Lexicon,
}

impl SentimentAnalyzer {
    pub fn new(model: Arc<dyn SentimentModel>, lexicon: Lexicon) -> Self {
        Self { model, lexicon }
    }

    pub fn analyze(&self, text: &str) -> Result<SentimentResult, SentimentError> {
        let prediction = self.model.predict(text)?;
        let lexicon_score = self.lexicon.score(text);
        debug!(
            "model {} scored {:.3} ({}), lexicon polarity {:.3}",
            self.model.model_name(),
            prediction.score,
            prediction.label,
            lexicon_score.polarity
        );
        Ok(blend(&prediction, lexicon_score.polarity))
    }

    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }
}
