// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use crate::vision::ImagePrediction;

/// Body of POST /classify_image: the top predictions, highest first
///
/// ```json
/// [{"label": "n02123045", "description": "tabby", "probability": 0.61}, ...]
/// ```
pub type ClassifyImageResponse = Vec<ImagePrediction>;
