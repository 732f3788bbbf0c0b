// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /classify_image tests
//!
//! Verify the upload contract with a fake classifier:
//! - a valid image yields three ranked predictions
//! - a missing `image` field or a non-multipart body yields 400
//! - an upload over the body limit yields 413
//! - undecodable bytes and inference failures yield 500

use super::helpers::*;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

fn upload_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/classify_image")
        .header(header::CONTENT_TYPE, multipart_content_type())
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_valid_image_returns_top_three() {
    let app = app(default_state());

    let response = app
        .oneshot(upload_request(multipart_body("image", "cat.png", &png_bytes())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let predictions = json.as_array().expect("response should be a list");
    assert_eq!(predictions.len(), 3);

    assert_eq!(predictions[0]["label"], "n02123045");
    assert_eq!(predictions[0]["description"], "tabby");

    let probabilities: Vec<f64> = predictions
        .iter()
        .map(|p| p["probability"].as_f64().unwrap())
        .collect();
    for p in &probabilities {
        assert!((0.0..=1.0).contains(p));
    }
    assert!(probabilities.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_missing_image_field_returns_400() {
    let app = app(default_state());

    let response = app
        .oneshot(upload_request(multipart_body("file", "cat.png", &png_bytes())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "No image uploaded"})
    );
}

#[tokio::test]
async fn test_non_multipart_body_returns_400() {
    let app = app(default_state());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/classify_image")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "No image uploaded"})
    );
}

#[tokio::test]
async fn test_upload_over_limit_returns_413() {
    let oversized = vec![0u8; TEST_UPLOAD_LIMIT + 1];
    let response = app(default_state())
        .oneshot(upload_request(multipart_body("image", "big.png", &oversized)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("size limit"));
}

#[tokio::test]
async fn test_undecodable_image_returns_500() {
    let app = app(default_state());

    let response = app
        .oneshot(upload_request(multipart_body(
            "image",
            "notes.txt",
            b"definitely not an image",
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_inference_failure_returns_500() {
    let state = state_with(
        Arc::new(FailingImageClassifier),
        sentiment_model("POSITIVE", 0.9),
    );
    let app = app(state);

    let response = app
        .oneshot(upload_request(multipart_body("image", "cat.png", &png_bytes())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("session run failed"));
}
