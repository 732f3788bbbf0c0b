// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Request body for POST /analyze
///
/// ```json
/// {"text": "I love this"}
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Text to score; a missing field is the empty string
    #[serde(default)]
    pub text: String,
}
