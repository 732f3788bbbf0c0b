// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Corpus loading from an existing cache directory
//!
//! A pre-populated `data_home` must be used as-is: no download is attempted
//! (the configured URL is unreachable) and categories come back sorted.

use ai_tools_server::text::{
    fetch_20newsgroups, CorpusConfig, CorpusError, ARTICLE_CATEGORIES,
};
use std::path::Path;
use tempfile::TempDir;

const ARTICLES: [(&str, &str, &str); 8] = [
    ("20news-bydate-train", "sci.space", "nasa shuttle reached orbit after launch"),
    ("20news-bydate-test", "sci.space", "satellite orbit around the space station"),
    ("20news-bydate-train", "rec.sport.baseball", "the pitcher threw a strikeout"),
    ("20news-bydate-test", "rec.sport.baseball", "home run to win the baseball game"),
    ("20news-bydate-train", "talk.politics.mideast", "israel and lebanon peace talks"),
    ("20news-bydate-test", "talk.politics.mideast", "arab israeli conflict politics"),
    ("20news-bydate-train", "comp.graphics", "rendering polygons with opengl shaders"),
    ("20news-bydate-test", "comp.graphics", "ray tracing graphics pipeline"),
];

fn populate_cache(data_home: &Path, articles: &[(&str, &str, &str)]) {
    for (i, (folder, category, body)) in articles.iter().enumerate() {
        let dir = data_home.join("20news_home").join(folder).join(category);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(format!("{}", 50000 + i)), body).unwrap();
    }
}

fn offline_config(data_home: &Path) -> CorpusConfig {
    CorpusConfig {
        data_home: data_home.to_path_buf(),
        url: "http://127.0.0.1:9/unreachable.tar.gz".to_string(),
        sha256: None,
    }
}

#[tokio::test]
async fn test_cached_corpus_loads_all_subsets() {
    let tmp = TempDir::new().unwrap();
    populate_cache(tmp.path(), &ARTICLES);

    let corpus = fetch_20newsgroups(&offline_config(tmp.path()), &ARTICLE_CATEGORIES)
        .await
        .unwrap();

    assert_eq!(corpus.len(), 8);
    assert_eq!(
        corpus.target_names,
        vec![
            "comp.graphics",
            "rec.sport.baseball",
            "sci.space",
            "talk.politics.mideast"
        ]
    );
    for (document, &target) in corpus.documents.iter().zip(&corpus.targets) {
        let (_, category, _) = ARTICLES
            .iter()
            .find(|(_, _, body)| *body == document.as_str())
            .unwrap();
        assert_eq!(corpus.target_names[target], *category);
    }
}

#[tokio::test]
async fn test_missing_category_is_an_error() {
    let tmp = TempDir::new().unwrap();
    // Drop every comp.graphics article
    let partial: Vec<_> = ARTICLES
        .iter()
        .copied()
        .filter(|(_, category, _)| *category != "comp.graphics")
        .collect();
    populate_cache(tmp.path(), &partial);

    let result = fetch_20newsgroups(&offline_config(tmp.path()), &ARTICLE_CATEGORIES).await;

    assert!(matches!(result, Err(CorpusError::MissingCategory(c)) if c == "comp.graphics"));
}

#[tokio::test]
async fn test_unreachable_source_without_cache_fails() {
    let tmp = TempDir::new().unwrap();

    let result = fetch_20newsgroups(&offline_config(tmp.path()), &ARTICLE_CATEGORIES).await;

    assert!(matches!(result, Err(CorpusError::Download(_))));
}
