// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::{DefaultBodyLimit, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{analyze_handler, classify_image_handler, predict_handler};
use crate::sentiment::SentimentAnalyzer;
use crate::text::ArticleClassifier;
use crate::version;
use crate::vision::ImageClassifier;

/// Read-only models shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub image_classifier: Arc<dyn ImageClassifier>,
    pub article_classifier: Arc<ArticleClassifier>,
    pub sentiment: Arc<SentimentAnalyzer>,
}

impl AppState {
    pub fn new(
        image_classifier: Arc<dyn ImageClassifier>,
        article_classifier: ArticleClassifier,
        sentiment: SentimentAnalyzer,
    ) -> Self {
        Self {
            image_classifier,
            article_classifier: Arc::new(article_classifier),
            sentiment: Arc::new(sentiment),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Endpoints served by this build
    pub features: Vec<String>,
    pub models: ModelsInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelsInfo {
    pub image: String,
    pub text: Vec<String>,
    pub sentiment: String,
}

/// Build the router with every endpoint, CORS and request tracing
pub fn create_app(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/classify_image", post(classify_image_handler))
        .route("/predict", post(predict_handler))
        .route("/analyze", post(analyze_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn start_server(
    addr: SocketAddr,
    state: AppState,
    max_upload_bytes: usize,
) -> anyhow::Result<()> {
    let app = create_app(state, max_upload_bytes);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: version::VERSION_NUMBER.to_string(),
        features: version::FEATURES.iter().map(|f| f.to_string()).collect(),
        models: ModelsInfo {
            image: state.image_classifier.model_name().to_string(),
            text: state
                .article_classifier
                .pipeline()
                .target_names()
                .to_vec(),
            sentiment: state.sentiment.model_name().to_string(),
        },
    })
}
