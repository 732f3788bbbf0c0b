// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod analyze;
pub mod classify_image;
pub mod errors;
pub mod http_server;
pub mod predict;

pub use analyze::{analyze_handler, AnalyzeRequest};
pub use classify_image::{classify_image_handler, ClassifyImageResponse};
pub use errors::{ApiError, ErrorResponse};
pub use http_server::{create_app, start_server, AppState, HealthResponse, ModelsInfo};
pub use predict::{predict_handler, PredictRequest, PredictResponse};
