// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Sentiment endpoint module
//!
//! Provides POST /analyze for scoring the sentiment of one text.

pub mod handler;
pub mod request;

pub use handler::analyze_handler;
pub use request::AnalyzeRequest;
