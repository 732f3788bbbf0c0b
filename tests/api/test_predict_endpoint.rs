// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /predict tests against a pipeline fit on a handful of articles

use super::helpers::*;
use ai_tools_server::api::PredictResponse;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use tower::util::ServiceExt;

const DISPLAY_NAMES: [&str; 4] = [
    "Science - Space",
    "Recreational Sports - Baseball",
    "Politics - Middle East",
    "Computer Science - Graphics",
];

fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn predict(body: &str) -> (StatusCode, serde_json::Value) {
    let response = app(default_state())
        .oneshot(json_request(body))
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

#[tokio::test]
async fn test_one_category_per_text() {
    let (status, json) = predict(
        r#"{"texts": [
            "The shuttle launch reached orbit",
            "The pitcher gave up a home run",
            "New opengl shaders for rendering",
            "Peace talks between israel and lebanon"
        ]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: PredictResponse = serde_json::from_value(json).unwrap();
    assert_eq!(response.texts.len(), 4);
    assert_eq!(response.predicted_categories.len(), 4);
    assert_eq!(
        response.predicted_categories,
        vec![
            "Science - Space",
            "Recreational Sports - Baseball",
            "Computer Science - Graphics",
            "Politics - Middle East",
        ]
    );
}

#[tokio::test]
async fn test_texts_echoed_in_order() {
    let (_, json) = predict(r#"{"texts": ["b text", "a text", "b text"]}"#).await;

    assert_eq!(json["texts"], serde_json::json!(["b text", "a text", "b text"]));
    for category in json["predicted_categories"].as_array().unwrap() {
        assert!(DISPLAY_NAMES.contains(&category.as_str().unwrap()));
    }
}

#[tokio::test]
async fn test_empty_batch() {
    let (status, json) = predict(r#"{"texts": []}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({"texts": [], "predicted_categories": []})
    );
}

#[tokio::test]
async fn test_missing_texts_is_empty_batch() {
    let (status, json) = predict("{}").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({"texts": [], "predicted_categories": []})
    );
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let response = app(default_state())
        .oneshot(json_request("{\"texts\": ["))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_body_over_limit_rejected() {
    let text = "x".repeat(TEST_UPLOAD_LIMIT + 1);
    let body = serde_json::json!({ "texts": [text] }).to_string();

    let response = app(default_state())
        .oneshot(json_request(&body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
