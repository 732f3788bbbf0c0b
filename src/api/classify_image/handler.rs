// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image classification handler

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::{multipart::MultipartError, Multipart};
use tracing::{debug, info, warn};

use super::response::ClassifyImageResponse;
use crate::api::http_server::AppState;
use crate::api::ApiError;
use crate::vision::{decode_image_bytes, TOP_K};

/// Multipart field carrying the upload
pub const IMAGE_FIELD: &str = "image";

/// POST /classify_image - Rank ImageNet classes for an uploaded image
///
/// # Request
/// `multipart/form-data` with a file field named `image`. The format is
/// detected from the bytes.
///
/// # Response
/// The three most likely classes as `{label, description, probability}`,
/// highest probability first.
///
/// # Errors
/// - 400 Bad Request: no `image` field, or the body is not multipart
/// - 413 Payload Too Large: the upload exceeds the configured body limit
/// - 500 Internal Server Error: the image cannot be decoded or inference fails
pub async fn classify_image_handler(
    State(state): State<AppState>,
    multipart: Option<Multipart>,
) -> Result<Json<ClassifyImageResponse>, ApiError> {
    let Some(mut multipart) = multipart else {
        warn!("classify_image called without a multipart body");
        return Err(ApiError::NoImageUploaded);
    };

    let bytes = read_image_field(&mut multipart).await?.ok_or_else(|| {
        warn!("classify_image called without an '{}' field", IMAGE_FIELD);
        ApiError::NoImageUploaded
    })?;

    debug!("Received image upload: {} bytes", bytes.len());

    let classifier = state.image_classifier.clone();
    let predictions = tokio::task::spawn_blocking(move || {
        let (image, image_info) = decode_image_bytes(&bytes)?;
        debug!(
            "Decoded image: {}x{} {:?}",
            image_info.width, image_info.height, image_info.format
        );
        classifier
            .classify(&image, TOP_K)
            .map_err(ApiError::from)
    })
    .await??;

    if let Some(top) = predictions.first() {
        info!(
            "Image classified as '{}' ({:.3})",
            top.description, top.probability
        );
    }

    Ok(Json(predictions))
}

/// Return the bytes of the first `image` field, skipping any other fields
async fn read_image_field(multipart: &mut Multipart) -> Result<Option<Vec<u8>>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Malformed multipart body", e))?
    {
        if field.name() == Some(IMAGE_FIELD) {
            let data = field
                .bytes()
                .await
                .map_err(|e| multipart_error("Failed to read upload", e))?;
            return Ok(Some(data.to_vec()));
        }
    }
    Ok(None)
}

/// Length-limit failures surface as 413, like the JSON extractors
fn multipart_error(context: &str, err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!("Upload rejected: {}", err);
        ApiError::PayloadTooLarge(format!("Upload exceeds the size limit: {}", err))
    } else {
        ApiError::InvalidRequest(format!("{}: {}", context, err))
    }
}
