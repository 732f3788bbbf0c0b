// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Response body for POST /predict
///
/// `predicted_categories[i]` is the display category of `texts[i]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictResponse {
    pub texts: Vec<String>,
    pub predicted_categories: Vec<String>,
}
