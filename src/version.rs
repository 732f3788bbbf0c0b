// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the AI Tools server

/// Semantic version number
pub const VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

/// Endpoints served by this build
pub const FEATURES: &[&str] = &["classify-image", "predict", "analyze"];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("AI Tools Server {}", VERSION_NUMBER)
}
