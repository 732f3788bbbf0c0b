// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Article category classifier served by `/predict`

use super::mapping::CategoryMapping;
use super::pipeline::TextPipeline;
use super::TextError;

/// Fitted pipeline plus the display mapping for its categories
#[derive(Debug, Clone)]
pub struct ArticleClassifier {
    pipeline: TextPipeline,
    mapping: CategoryMapping,
}

impl ArticleClassifier {
    /// Pair a fitted pipeline with a mapping
    ///
    /// Fails unless the pipeline's categories are exactly the mapping's keys,
    /// so lookups cannot miss at request time.
    pub fn new(pipeline: TextPipeline, mapping: CategoryMapping) -> Result<Self, TextError> {
        mapping.validate(pipeline.target_names())?;
        Ok(Self { pipeline, mapping })
    }

    /// Display category per text, in input order
    pub fn classify(&self, texts: &[String]) -> Result<Vec<String>, TextError> {
        self.pipeline
            .predict_names(texts)
            .into_iter()
            .map(|name| self.mapping.display_name(name).map(str::to_string))
            .collect()
    }

    pub fn pipeline(&self) -> &TextPipeline {
        &self.pipeline
    }
}
