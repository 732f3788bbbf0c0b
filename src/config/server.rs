// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::text::corpus::{CorpusConfig, DEFAULT_CORPUS_SHA256, DEFAULT_CORPUS_URL};
use crate::vision::{ImageModelConfig, TensorLayout};

/// AI Tools server: image, article and sentiment classification over HTTP
#[derive(Parser, Debug, Clone)]
#[command(name = "ai-tools-server")]
#[command(version)]
#[command(about = "HTTP API for image classification, article categorization and sentiment analysis", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "AI_TOOLS_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "API_PORT", default_value_t = 5000)]
    pub port: u16,

    /// MobileNet ONNX model
    #[arg(
        long,
        env = "IMAGE_MODEL_PATH",
        default_value = "./models/mobilenet/mobilenet.onnx"
    )]
    pub image_model_path: PathBuf,

    /// Keras-style imagenet_class_index.json
    #[arg(
        long,
        env = "IMAGE_LABELS_PATH",
        default_value = "./models/mobilenet/imagenet_class_index.json"
    )]
    pub image_labels_path: PathBuf,

    /// Name of the image model's input tensor
    #[arg(long, env = "IMAGE_INPUT_NAME", default_value = "input_1")]
    pub image_input_name: String,

    /// Tensor layout expected by the image model
    #[arg(long, env = "IMAGE_LAYOUT", value_enum, default_value_t = TensorLayout::Nhwc)]
    pub image_layout: TensorLayout,

    /// DistilBERT SST-2 ONNX model
    #[arg(
        long,
        env = "SENTIMENT_MODEL_PATH",
        default_value = "./models/distilbert-sst2/model.onnx"
    )]
    pub sentiment_model_path: PathBuf,

    /// tokenizer.json matching the sentiment model
    #[arg(
        long,
        env = "SENTIMENT_TOKENIZER_PATH",
        default_value = "./models/distilbert-sst2/tokenizer.json"
    )]
    pub sentiment_tokenizer_path: PathBuf,

    /// Polarity lexicon override (built-in lexicon when unset)
    #[arg(long, env = "SENTIMENT_LEXICON_PATH")]
    pub sentiment_lexicon_path: Option<PathBuf>,

    /// Directory holding the downloaded corpus
    #[arg(long, env = "AI_TOOLS_DATA_HOME", default_value = "./data")]
    pub data_home: PathBuf,

    /// Download location of 20news-bydate.tar.gz
    #[arg(long, env = "CORPUS_URL", default_value = DEFAULT_CORPUS_URL)]
    pub corpus_url: String,

    /// Expected SHA-256 of the corpus archive (empty disables the check)
    #[arg(long, env = "CORPUS_SHA256", default_value = DEFAULT_CORPUS_SHA256)]
    pub corpus_sha256: String,

    /// Fraction of the corpus held out for the accuracy check
    #[arg(long, env = "TEST_SIZE", default_value_t = 0.25)]
    pub test_size: f64,

    /// Seed for the train/test shuffle
    #[arg(long, env = "SPLIT_SEED", default_value_t = 42)]
    pub split_seed: u64,

    /// Intra-op threads per ONNX session
    #[arg(long, env = "ONNX_THREADS", default_value_t = 4)]
    pub onnx_threads: usize,

    /// Maximum request body size in bytes
    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn corpus_config(&self) -> CorpusConfig {
        let sha256 = self.corpus_sha256.trim();
        CorpusConfig {
            data_home: self.data_home.clone(),
            url: self.corpus_url.clone(),
            sha256: (!sha256.is_empty()).then(|| sha256.to_lowercase()),
        }
    }

    pub fn image_model_config(&self) -> ImageModelConfig {
        ImageModelConfig {
            input_name: self.image_input_name.clone(),
            layout: self.image_layout,
            intra_threads: self.onnx_threads,
            ..ImageModelConfig::default()
        }
    }
}
