// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! 20 Newsgroups corpus download, cache and loading
//!
//! The "bydate" archive is downloaded once, verified against its SHA-256,
//! and extracted under `data_home`. Later startups reuse the extraction.

use flate2::read::GzDecoder;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default location of `20news-bydate.tar.gz`
pub const DEFAULT_CORPUS_URL: &str = "https://ndownloader.figshare.com/files/5975967";

/// SHA-256 of the published archive
pub const DEFAULT_CORPUS_SHA256: &str =
    "8f1b2514ca22a5ade8fbb9cfa5727df95fa587f4c87b786e15c759fa66d95610";

const ARCHIVE_NAME: &str = "20news-bydate.tar.gz";
const CACHE_DIR: &str = "20news_home";
const TRAIN_FOLDER: &str = "20news-bydate-train";
const TEST_FOLDER: &str = "20news-bydate-test";

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Failed to download corpus: {0}")]
    Download(#[from] reqwest::Error),

    #[error("Corpus checksum mismatch: expected {expected}, got {actual}")]
    Checksum { expected: String, actual: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Category '{0}' not found in corpus")]
    MissingCategory(String),

    #[error("Corpus extraction task failed: {0}")]
    Task(String),
}

impl CorpusError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        CorpusError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Where to find (or put) the corpus
#[derive(Debug, Clone)]
pub struct CorpusConfig {
    pub data_home: PathBuf,
    pub url: String,
    /// Expected archive digest; `None` skips verification
    pub sha256: Option<String>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            data_home: PathBuf::from("./data"),
            url: DEFAULT_CORPUS_URL.to_string(),
            sha256: Some(DEFAULT_CORPUS_SHA256.to_string()),
        }
    }
}

/// Labelled documents with alphabetically sorted category names
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub documents: Vec<String>,
    pub targets: Vec<usize>,
    pub target_names: Vec<String>,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Load every document of `categories`, downloading the archive if needed
pub async fn fetch_20newsgroups(
    config: &CorpusConfig,
    categories: &[&str],
) -> Result<Corpus, CorpusError> {
    let root = ensure_extracted(config).await?;
    let categories: Vec<String> = categories.iter().map(|c| c.to_string()).collect();

    tokio::task::spawn_blocking(move || load_from_dir(&root, &categories))
        .await
        .map_err(|e| CorpusError::Task(e.to_string()))?
}

/// Return the extracted corpus directory, downloading and unpacking on first use
pub async fn ensure_extracted(config: &CorpusConfig) -> Result<PathBuf, CorpusError> {
    let target = config.data_home.join(CACHE_DIR);
    if target.join(TRAIN_FOLDER).is_dir() && target.join(TEST_FOLDER).is_dir() {
        debug!("Using cached corpus at {}", target.display());
        return Ok(target);
    }

    tokio::fs::create_dir_all(&config.data_home)
        .await
        .map_err(|e| CorpusError::io(&config.data_home, e))?;

    let archive_path = config.data_home.join(ARCHIVE_NAME);
    info!("Downloading 20 Newsgroups corpus from {}", config.url);
    let bytes = reqwest::get(&config.url)
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    info!("Downloaded {} bytes", bytes.len());

    match &config.sha256 {
        Some(expected) => verify_checksum(&bytes, expected)?,
        None => warn!("Corpus checksum verification disabled"),
    }

    tokio::fs::write(&archive_path, &bytes)
        .await
        .map_err(|e| CorpusError::io(&archive_path, e))?;

    let staging = config.data_home.join(format!("{}.partial", CACHE_DIR));
    let archive = archive_path.clone();
    let unpack_to = staging.clone();
    tokio::task::spawn_blocking(move || extract_archive(&archive, &unpack_to))
        .await
        .map_err(|e| CorpusError::Task(e.to_string()))??;

    // Only a complete extraction becomes visible under the cache name
    if target.exists() {
        tokio::fs::remove_dir_all(&target)
            .await
            .map_err(|e| CorpusError::io(&target, e))?;
    }
    tokio::fs::rename(&staging, &target)
        .await
        .map_err(|e| CorpusError::io(&target, e))?;
    tokio::fs::remove_file(&archive_path)
        .await
        .map_err(|e| CorpusError::io(&archive_path, e))?;

    info!("Corpus extracted to {}", target.display());
    Ok(target)
}

pub fn verify_checksum(bytes: &[u8], expected: &str) -> Result<(), CorpusError> {
    let actual = hex::encode(Sha256::digest(bytes));
    if !actual.eq_ignore_ascii_case(expected) {
        return Err(CorpusError::Checksum {
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}

/// Unpack a `.tar.gz` archive into `destination`
pub fn extract_archive(archive_path: &Path, destination: &Path) -> Result<(), CorpusError> {
    if destination.exists() {
        std::fs::remove_dir_all(destination).map_err(|e| CorpusError::io(destination, e))?;
    }
    std::fs::create_dir_all(destination).map_err(|e| CorpusError::io(destination, e))?;

    let file = std::fs::File::open(archive_path).map_err(|e| CorpusError::io(archive_path, e))?;
    let mut archive = tar::Archive::new(GzDecoder::new(file));
    archive
        .unpack(destination)
        .map_err(|e| CorpusError::io(archive_path, e))?;
    Ok(())
}

/// Load an extracted corpus laid out as `<folder>/<category>/<document>`
///
/// Both halves of the by-date split are read, train first. Categories are sorted alphabetically and become `target_names`; documents
/// within a category are read in file-name order and decoded as Latin-1.
pub fn load_from_dir(
    root: &Path,
    categories: &[String],
) -> Result<Corpus, CorpusError> {
    let mut target_names = categories.to_vec();
    target_names.sort();
    target_names.dedup();

    let mut corpus = Corpus {
        target_names,
        ..Default::default()
    };

    for folder in [TRAIN_FOLDER, TEST_FOLDER] {
        for (target, category) in corpus.target_names.iter().enumerate() {
            let dir = root.join(folder).join(category);
            if !dir.is_dir() {
                return Err(CorpusError::MissingCategory(category.clone()));
            }

            let mut paths = Vec::new();
            for entry in std::fs::read_dir(&dir).map_err(|e| CorpusError::io(&dir, e))? {
                let path = entry.map_err(|e| CorpusError::io(&dir, e))?.path();
                if path.is_file() {
                    paths.push(path);
                }
            }
            paths.sort();

            for path in paths {
                let bytes = std::fs::read(&path).map_err(|e| CorpusError::io(&path, e))?;
                corpus.documents.push(decode_latin1(&bytes));
                corpus.targets.push(target);
            }
        }
    }

    debug!(
        "Loaded {} documents from {}",
        corpus.documents.len(),
        root.display()
    );
    Ok(corpus)
}

/// Every byte maps to the code point of the same value
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
