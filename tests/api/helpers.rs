// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Shared fixtures for the API tests: fake models, a tiny fitted pipeline,
//! and request/response helpers.

#![allow(dead_code)]

use ai_tools_server::{
    api::http_server::{create_app, AppState},
    sentiment::{Lexicon, ModelPrediction, SentimentAnalyzer, SentimentError, SentimentModel},
    text::{ArticleClassifier, CategoryMapping, TextPipeline},
    vision::{ImageClassifier, ImagePrediction, VisionError},
};
use axum::{body::Body, http::Response, Router};
use image::DynamicImage;
use mockall::mock;
use std::io::Cursor;
use std::sync::Arc;

pub const BOUNDARY: &str = "X-AI-TOOLS-BOUNDARY";
pub const TEST_UPLOAD_LIMIT: usize = 1024 * 1024;

mock! {
    pub Sentiment {}

    impl SentimentModel for Sentiment {
        fn predict(&self, text: &str) -> Result<ModelPrediction, SentimentError>;
        fn model_name(&self) -> &str;
    }
}

/// Returns the same three classes for any image
pub struct FixedImageClassifier;

impl ImageClassifier for FixedImageClassifier {
    fn classify(
        &self,
        _image: &DynamicImage,
        top_k: usize,
    ) -> Result<Vec<ImagePrediction>, VisionError> {
        let all = vec![
            ImagePrediction {
                label: "n02123045".to_string(),
                description: "tabby".to_string(),
                probability: 0.61,
            },
            ImagePrediction {
                label: "n02123159".to_string(),
                description: "tiger_cat".to_string(),
                probability: 0.22,
            },
            ImagePrediction {
                label: "n02124075".to_string(),
                description: "Egyptian_cat".to_string(),
                probability: 0.09,
            },
            ImagePrediction {
                label: "n02127052".to_string(),
                description: "lynx".to_string(),
                probability: 0.01,
            },
        ];
        Ok(all.into_iter().take(top_k).collect())
    }

    fn model_name(&self) -> &str {
        "fixed-mobilenet"
    }
}

/// Fails every inference
pub struct FailingImageClassifier;

impl ImageClassifier for FailingImageClassifier {
    fn classify(
        &self,
        _image: &DynamicImage,
        _top_k: usize,
    ) -> Result<Vec<ImagePrediction>, VisionError> {
        Err(VisionError::Runtime("session run failed".to_string()))
    }

    fn model_name(&self) -> &str {
        "failing-mobilenet"
    }
}

/// Three short articles per newsgroup, enough to separate the four classes
pub fn training_corpus() -> (Vec<String>, Vec<usize>, Vec<String>) {
    let by_category: [(&str, [&str; 3]); 4] = [
        (
            "comp.graphics",
            [
                "rendering polygons with opengl shaders",
                "image compression and jpeg file formats for graphics",
                "ray tracing graphics pipeline and texture mapping",
            ],
        ),
        (
            "rec.sport.baseball",
            [
                "the pitcher threw a strikeout in the ninth inning",
                "home run to win the baseball season opener",
                "batting average of every pitcher in the baseball league",
            ],
        ),
        (
            "sci.space",
            [
                "nasa shuttle reached orbit after launch",
                "satellite orbit around the space station",
                "rocket launch for the next space mission",
            ],
        ),
        (
            "talk.politics.mideast",
            [
                "israel and lebanon begin peace talks",
                "arab israeli conflict and regional politics",
                "palestinian and israeli negotiations stalled",
            ],
        ),
    ];

    let mut documents = Vec::new();
    let mut targets = Vec::new();
    let mut target_names = Vec::new();
    for (target, (name, docs)) in by_category.iter().enumerate() {
        target_names.push(name.to_string());
        for doc in docs {
            documents.push(doc.to_string());
            targets.push(target);
        }
    }
    (documents, targets, target_names)
}

pub fn article_classifier() -> ArticleClassifier {
    let (documents, targets, target_names) = training_corpus();
    let pipeline = TextPipeline::fit(&documents, &targets, target_names).unwrap();
    ArticleClassifier::new(pipeline, CategoryMapping::articles()).unwrap()
}

/// Mock that reports the given label and score for any text
pub fn sentiment_model(label: &str, score: f32) -> MockSentiment {
    let label = label.to_string();
    let mut model = MockSentiment::new();
    model.expect_predict().returning(move |_| {
        Ok(ModelPrediction {
            label: label.clone(),
            score,
        })
    });
    model
        .expect_model_name()
        .return_const("mock-sst2".to_string());
    model
}

pub fn state_with(image: Arc<dyn ImageClassifier>, sentiment: MockSentiment) -> AppState {
    AppState::new(
        image,
        article_classifier(),
        SentimentAnalyzer::new(Arc::new(sentiment), Lexicon::builtin().unwrap()),
    )
}

pub fn default_state() -> AppState {
    state_with(
        Arc::new(FixedImageClassifier),
        sentiment_model("POSITIVE", 0.99),
    )
}

pub fn app(state: AppState) -> Router {
    create_app(state, TEST_UPLOAD_LIMIT)
}

/// A small valid PNG
pub fn png_bytes() -> Vec<u8> {
    let image = DynamicImage::new_rgb8(32, 24);
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

/// Build a multipart/form-data body with a single file field
pub fn multipart_body(field_name: &str, filename: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field_name, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
