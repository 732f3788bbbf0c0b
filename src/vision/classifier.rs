// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! ImageNet classification over an ONNX MobileNet export

use image::DynamicImage;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};

use super::labels::ImageNetLabels;
use crate::utils::math::softmax;
use super::preprocessing::{preprocess_for_mobilenet, TensorLayout};
use super::VisionError;

/// One ranked class for an uploaded image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePrediction {
    /// ImageNet WordNet id (e.g. "n02123045")
    pub label: String,
    /// Human-readable class name (e.g. "tabby")
    pub description: String,
    /// Probability in [0, 1]
    pub probability: f32,
}

/// Anything that can rank ImageNet classes for an image
pub trait ImageClassifier: Send + Sync {
    /// Return the `top_k` most likely classes, highest probability first
    fn classify(&self, image: &DynamicImage, top_k: usize)
        -> Result<Vec<ImagePrediction>, VisionError>;

    /// Model name reported by the health endpoint
    fn model_name(&self) -> &str;
}

/// Settings for loading the ONNX image model
#[derive(Debug, Clone)]
pub struct ImageModelConfig {
    pub model_name: String,
    pub input_name: String,
    pub layout: TensorLayout,
    pub intra_threads: usize,
}

impl Default for ImageModelConfig {
    fn default() -> Self {
        Self {
            model_name: "mobilenet".to_string(),
            input_name: "input_1".to_string(),
            layout: TensorLayout::Nhwc,
            intra_threads: 4,
        }
    }
}

/// MobileNet classifier running on ONNX Runtime (CPU)
pub struct OnnxImageClassifier {
    /// A session run needs exclusive access
    session: Mutex<Session>,
    labels: ImageNetLabels,
    config: ImageModelConfig,
}

impl std::fmt::Debug for OnnxImageClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxImageClassifier")
            .field("config", &self.config)
            .field("classes", &self.labels.len())
            .finish_non_exhaustive()
    }
}

impl OnnxImageClassifier {
    /// Load the model and its class index
    ///
    /// Fails if either file is missing or the ONNX graph cannot be loaded.
    pub fn new(
        model_path: impl AsRef<Path>,
        labels: ImageNetLabels,
        config: ImageModelConfig,
    ) -> Result<Self, VisionError> {
        let model_path = model_path.as_ref();
        if !model_path.exists() {
            return Err(VisionError::ModelNotFound(model_path.display().to_string()));
        }

        let session = Session::builder()
            .map_err(VisionError::runtime)?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(VisionError::runtime)?
            .with_intra_threads(config.intra_threads)
            .map_err(VisionError::runtime)?
            .commit_from_file(model_path)
            .map_err(VisionError::runtime)?;

        info!(
            "Image model '{}' loaded from {} ({} classes, {:?} layout)",
            config.model_name,
            model_path.display(),
            labels.len(),
            config.layout
        );

        Ok(Self {
            session: Mutex::new(session),
            labels,
            config,
        })
    }

    fn run(&self, image: &DynamicImage) -> Result<Vec<f32>, VisionError> {
        let tensor = preprocess_for_mobilenet(image, self.config.layout);
        let input = Value::from_array(tensor).map_err(VisionError::runtime)?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| VisionError::Runtime("image session lock poisoned".to_string()))?;
        let outputs = session
            .run(ort::inputs![self.config.input_name.as_str() => input])
            .map_err(VisionError::runtime)?;

        let scores = outputs[0]
            .try_extract_array::<f32>()
            .map_err(VisionError::runtime)?;

        Ok(scores.iter().copied().collect())
    }
}

impl ImageClassifier for OnnxImageClassifier {
    fn classify(
        &self,
        image: &DynamicImage,
        top_k: usize,
    ) -> Result<Vec<ImagePrediction>, VisionError> {
        let scores = self.run(image)?;
        if scores.len() != self.labels.len() {
            return Err(VisionError::OutputMismatch {
                outputs: scores.len(),
                labels: self.labels.len(),
            });
        }

        let probabilities = to_probabilities(scores);
        let predictions = decode_top_k(&probabilities, &self.labels, top_k);
        debug!(
            "Top prediction: {:?}",
            predictions.first().map(|p| (&p.description, p.probability))
        );
        Ok(predictions)
    }

    fn model_name(&self) -> &str {
        &self.config.model_name
    }
}

/// Ensure model output is a probability distribution
///
/// Keras MobileNet ends in a softmax layer, so its output is passed through.
/// Exports that stop at the logits get a softmax applied here.
pub fn to_probabilities(scores: Vec<f32>) -> Vec<f32> {
    let in_range = scores.iter().all(|s| (0.0..=1.0).contains(s));
    let sum: f32 = scores.iter().sum();
    if in_range && (sum - 1.0).abs() < 1e-3 {
        return scores;
    }
    softmax(&scores)
}

/// Rank probabilities and attach labels
///
/// Ties keep the lower class index first. `k` is clamped to the number of
/// classes.
pub fn decode_top_k(probabilities: &[f32], labels: &ImageNetLabels, k: usize) -> Vec<ImagePrediction> {
    let mut ranked: Vec<(usize, f32)> = probabilities.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    ranked
        .into_iter()
        .take(k)
        .filter_map(|(index, probability)| {
            labels.get(index).map(|class| ImagePrediction {
                label: class.wnid.clone(),
                description: class.description.clone(),
                probability,
            })
        })
        .collect()
}
