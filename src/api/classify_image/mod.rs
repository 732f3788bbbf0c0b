// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image classification endpoint module
//!
//! Provides POST /classify_image for ranking ImageNet classes of an upload.

pub mod handler;
pub mod response;

pub use handler::classify_image_handler;
pub use response::ClassifyImageResponse;
