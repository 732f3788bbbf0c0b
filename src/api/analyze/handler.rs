// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Sentiment handler

use axum::{extract::State, Json};
use tracing::{debug, info};

use super::request::AnalyzeRequest;
use crate::api::http_server::AppState;
use crate::api::ApiError;
use crate::sentiment::SentimentResult;

/// POST /analyze - Score the sentiment of one text
///
/// The label follows the sign of the lexicon polarity. See
/// [`blend`](crate::sentiment::blend::blend) for how the reported polarity is chosen.
///
/// # Errors
/// - 4xx: body is not valid JSON (rejected by the extractor)
/// - 500 Internal Server Error: the sentiment model failed
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<SentimentResult>, ApiError> {
    debug!("Analyze request: {} chars", request.text.len());

    let analyzer = state.sentiment.clone();
    let result = tokio::task::spawn_blocking(move || analyzer.analyze(&request.text))
        .await??;

    info!("Sentiment {} (polarity {})", result.sentiment, result.polarity);

    Ok(Json(result))
}
