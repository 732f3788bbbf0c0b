// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Request body for POST /predict
///
/// ```json
/// {"texts": ["The shuttle reached orbit", "He hit a home run"]}
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Texts to classify; a missing field is an empty batch
    #[serde(default)]
    pub texts: Vec<String>,
}
