// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Startup: load or train every model once and assemble the shared state

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::api::AppState;
use crate::config::ServerConfig;
use crate::sentiment::{Lexicon, OnnxSentimentModel, SentimentAnalyzer};
use crate::text::{
    fetch_20newsgroups, train_test_split, ArticleClassifier, CategoryMapping, Corpus, TextError,
    TextPipeline, ARTICLE_CATEGORIES,
};
use crate::vision::{ImageNetLabels, OnnxImageClassifier};

const SENTIMENT_MODEL_NAME: &str = "distilbert-base-uncased-finetuned-sst-2-english";

/// Build the application state; any failure is fatal for the process
pub async fn load_state(config: &ServerConfig) -> Result<AppState> {
    let labels = ImageNetLabels::from_file(&config.image_labels_path).with_context(|| {
        format!(
            "Failed to load ImageNet labels from {}",
            config.image_labels_path.display()
        )
    })?;
    let image_classifier = OnnxImageClassifier::new(
        &config.image_model_path,
        labels,
        config.image_model_config(),
    )
    .context("Failed to load image model")?;

    let corpus = fetch_20newsgroups(&config.corpus_config(), &ARTICLE_CATEGORIES)
        .await
        .context("Failed to fetch the 20 Newsgroups corpus")?;
    info!(
        "Loaded {} articles across {} categories",
        corpus.len(),
        corpus.target_names.len()
    );

    let test_size = config.test_size;
    let seed = config.split_seed;
    let article_classifier =
        tokio::task::spawn_blocking(move || fit_article_classifier(&corpus, test_size, seed))
            .await
            .context("Article classifier training task panicked")?
            .context("Failed to train article classifier")?;

    let sentiment_model = OnnxSentimentModel::new(
        SENTIMENT_MODEL_NAME,
        &config.sentiment_model_path,
        &config.sentiment_tokenizer_path,
        config.onnx_threads,
    )
    .context("Failed to load sentiment model")?;

    let lexicon = match &config.sentiment_lexicon_path {
        Some(path) => Lexicon::from_file(path)
            .with_context(|| format!("Failed to load lexicon from {}", path.display()))?,
        None => Lexicon::builtin().context("Failed to load built-in lexicon")?,
    };
    info!("Sentiment lexicon ready with {} entries", lexicon.len());

    Ok(AppState::new(
        Arc::new(image_classifier),
        article_classifier,
        SentimentAnalyzer::new(Arc::new(sentiment_model), lexicon),
    ))
}

/// Split, fit on the training part, report held-out accuracy and check the
/// fitted categories against the display mapping
pub fn fit_article_classifier(
    corpus: &Corpus,
    test_size: f64,
    seed: u64,
) -> Result<ArticleClassifier, TextError> {
    let split = train_test_split(&corpus.documents, &corpus.targets, test_size, seed)?;

    let pipeline = TextPipeline::fit(
        &split.train_documents,
        &split.train_targets,
        corpus.target_names.clone(),
    )?;

    let accuracy = pipeline.score(&split.test_documents, &split.test_targets);
    info!(
        "Article classifier accuracy on {} held-out documents: {:.3}",
        split.test_documents.len(),
        accuracy
    );

    ArticleClassifier::new(pipeline, CategoryMapping::articles())
}
