// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Pretrained sentiment classifier (DistilBERT fine-tuned on SST-2)
//!
//! The model is exported to ONNX and run on CPU through ONNX Runtime.
//! Input text is WordPiece-tokenized with the model's own `tokenizer.json`.
//! The two output logits are turned into probabilities; the larger one
//! gives the label and its confidence score.

use ndarray::Array2;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use std::path::Path;
use std::sync::Mutex;
use tokenizers::Tokenizer;
use tracing::{debug, info};

use super::SentimentError;
use crate::utils::math::{argmax, softmax};

/// Maximum sequence length accepted by DistilBERT
pub const MAX_SEQUENCE_LENGTH: usize = 512;

/// SST-2 output order
pub const SST2_LABELS: [&str; 2] = ["NEGATIVE", "POSITIVE"];

/// Label and confidence reported by a pretrained model
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPrediction {
    /// Model-specific label, e.g. "POSITIVE"
    pub label: String,
    /// Confidence for `label` in [0, 1]
    pub score: f32,
}

/// A pretrained sentiment model used only for inference
pub trait SentimentModel: Send + Sync {
    fn predict(&self, text: &str) -> Result<ModelPrediction, SentimentError>;

    fn model_name(&self) -> &str;
}

/// DistilBERT SST-2 running on ONNX Runtime
pub struct OnnxSentimentModel {
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    model_name: String,
    labels: Vec<String>,
    max_length: usize,
}

impl std::fmt::Debug for OnnxSentimentModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxSentimentModel")
            .field("model_name", &self.model_name)
            .field("labels", &self.labels)
            .field("max_length", &self.max_length)
            .finish_non_exhaustive()
    }
}

impl OnnxSentimentModel {
    /// Load the ONNX graph and tokenizer from disk
    ///
    /// # Errors
    /// - Model or tokenizer file not found
    /// - Tokenizer JSON invalid
    /// - ONNX Runtime initialization fails
    pub fn new(
        model_name: impl Into<String>,
        model_path: impl AsRef<Path>,
        tokenizer_path: impl AsRef<Path>,
        intra_threads: usize,
    ) -> Result<Self, SentimentError> {
        let model_name = model_name.into();
        let model_path = model_path.as_ref();
        let tokenizer_path = tokenizer_path.as_ref();

        if !model_path.exists() {
            return Err(SentimentError::ModelNotFound(model_path.display().to_string()));
        }
        if !tokenizer_path.exists() {
            return Err(SentimentError::ModelNotFound(
                tokenizer_path.display().to_string(),
            ));
        }

        let session = Session::builder()
            .map_err(SentimentError::runtime)?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(SentimentError::runtime)?
            .with_intra_threads(intra_threads)
            .map_err(SentimentError::runtime)?
            .commit_from_file(model_path)
            .map_err(SentimentError::runtime)?;

        let tokenizer = Tokenizer::from_file(tokenizer_path)
            .map_err(|e| SentimentError::Tokenizer(e.to_string()))?;

        info!(
            "Sentiment model '{}' loaded from {}",
            model_name,
            model_path.display()
        );

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            model_name,
            labels: SST2_LABELS.iter().map(|l| l.to_string()).collect(),
            max_length: MAX_SEQUENCE_LENGTH,
        })
    }

    fn encode(&self, text: &str) -> Result<(Vec<i64>, Vec<i64>), SentimentError> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| SentimentError::Tokenizer(e.to_string()))?;

        let mut input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let mut attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();

        truncate_keeping_last(&mut input_ids, self.max_length);
        truncate_keeping_last(&mut attention_mask, self.max_length);
        Ok((input_ids, attention_mask))
    }
}

/// Cut a sequence to `max_length`, keeping its final (separator) token
pub fn truncate_keeping_last<T: Copy>(tokens: &mut Vec<T>, max_length: usize) {
    if tokens.len() <= max_length || max_length == 0 {
        return;
    }
    let last = tokens[tokens.len() - 1];
    tokens.truncate(max_length - 1);
    tokens.push(last);
}

impl SentimentModel for OnnxSentimentModel {
    fn predict(&self, text: &str) -> Result<ModelPrediction, SentimentError> {
        let (input_ids, attention_mask) = self.encode(text)?;
        let seq_len = input_ids.len();

        let input_ids_array = Array2::from_shape_vec((1, seq_len), input_ids)
            .map_err(SentimentError::runtime)?;
        let attention_mask_array = Array2::from_shape_vec((1, seq_len), attention_mask)
            .map_err(SentimentError::runtime)?;

        let logits: Vec<f32> = {
            let mut session = self
                .session
                .lock()
                .map_err(|_| SentimentError::Runtime("sentiment session lock poisoned".to_string()))?;
            let outputs = session
                .run(ort::inputs![
                    "input_ids" => Value::from_array(input_ids_array).map_err(SentimentError::runtime)?,
                    "attention_mask" => Value::from_array(attention_mask_array).map_err(SentimentError::runtime)?
                ])
                .map_err(SentimentError::runtime)?;

            let output = outputs[0]
                .try_extract_array::<f32>()
                .map_err(SentimentError::runtime)?;
            output.iter().copied().collect()
        };

        if logits.len() != self.labels.len() {
            return Err(SentimentError::Runtime(format!(
                "expected {} logits, got {}",
                self.labels.len(),
                logits.len()
            )));
        }

        let probabilities = softmax(&logits);
        let best = argmax(&probabilities)
            .ok_or_else(|| SentimentError::Runtime("model returned no logits".to_string()))?;

        let prediction = ModelPrediction {
            label: self.labels[best].clone(),
            score: probabilities[best],
        };
        debug!("{} -> {:?} ({} tokens)", self.model_name, prediction, seq_len);
        Ok(prediction)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
