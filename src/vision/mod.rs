// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image classification
//!
//! This module provides:
//! - Upload decoding with content-based format detection
//! - MobileNet preprocessing (224x224, [-1, 1] scaling)
//! - ImageNet label loading and top-k decoding
//! - An ONNX Runtime backed classifier behind the `ImageClassifier` trait

pub mod classifier;
pub mod image_utils;
pub mod labels;
pub mod preprocessing;

use thiserror::Error;

pub use classifier::{
    decode_top_k, to_probabilities, ImageClassifier, ImageModelConfig, ImagePrediction,
    OnnxImageClassifier,
};
pub use image_utils::{decode_image_bytes, ImageError, ImageInfo};
pub use labels::{ImageNetClass, ImageNetLabels};
pub use preprocessing::{preprocess_for_mobilenet, TensorLayout, MOBILENET_INPUT_SIZE};

/// Number of predictions returned per image
pub const TOP_K: usize = 3;

/// Errors raised while loading or running the image model
#[derive(Debug, Error)]
pub enum VisionError {
    #[error("ONNX model file not found: {0}")]
    ModelNotFound(String),

    #[error("Invalid ImageNet labels: {0}")]
    Labels(String),

    #[error("ONNX Runtime error: {0}")]
    Runtime(String),

    #[error("Model produced {outputs} scores but {labels} labels are loaded")]
    OutputMismatch { outputs: usize, labels: usize },
}

impl VisionError {
    pub(crate) fn runtime(err: impl std::fmt::Display) -> Self {
        VisionError::Runtime(err.to_string())
    }
}
