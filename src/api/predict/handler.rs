// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Article category handler

use axum::{extract::State, Json};
use tracing::{debug, info};

use super::request::PredictRequest;
use super::response::PredictResponse;
use crate::api::http_server::AppState;
use crate::api::ApiError;

/// POST /predict - Assign a news category to each text
///
/// Texts are classified independently and the echoed `texts` keep the
/// request order. An empty batch yields empty lists.
///
/// # Errors
/// - 4xx: body is not valid JSON (rejected by the extractor)
/// - 500 Internal Server Error: a fitted category has no display name
pub async fn predict_handler(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    debug!("Predict request with {} texts", request.texts.len());

    let classifier = state.article_classifier.clone();
    let PredictRequest { texts } = request;

    let (texts, predicted_categories) = tokio::task::spawn_blocking(move || {
        let categories = classifier.classify(&texts)?;
        Ok::<_, ApiError>((texts, categories))
    })
    .await??;

    info!("Classified {} texts", texts.len());

    Ok(Json(PredictResponse {
        texts,
        predicted_categories,
    }))
}
