// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image preprocessing for MobileNet

use clap::ValueEnum;
use image::{imageops::FilterType, DynamicImage};
use ndarray::Array4;

/// Square input resolution expected by MobileNet
pub const MOBILENET_INPUT_SIZE: u32 = 224;

/// Memory layout of the input tensor
///
/// Keras exports keep channels last (`[1, H, W, 3]`); PyTorch-style exports
/// expect channels first (`[1, 3, H, W]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TensorLayout {
    #[default]
    Nhwc,
    Nchw,
}

/// Preprocess an image for MobileNet inference
///
/// Steps:
/// 1. Resize (without preserving aspect ratio) to 224x224 with a bicubic filter
/// 2. Convert to RGB, dropping any alpha channel
/// 3. Scale each channel to [-1, 1]: `pixel / 127.5 - 1`
/// 4. Lay out as a single-item batch in the requested layout
pub fn preprocess_for_mobilenet(image: &DynamicImage, layout: TensorLayout) -> Array4<f32> {
    let size = MOBILENET_INPUT_SIZE as usize;
    let resized = image.resize_exact(
        MOBILENET_INPUT_SIZE,
        MOBILENET_INPUT_SIZE,
        FilterType::CatmullRom,
    );
    let rgb = resized.to_rgb8();

    let mut tensor = match layout {
        TensorLayout::Nhwc => Array4::zeros((1, size, size, 3)),
        TensorLayout::Nchw => Array4::zeros((1, 3, size, size)),
    };

    for (x, y, pixel) in rgb.enumerate_pixels() {
        let (x, y) = (x as usize, y as usize);
        for c in 0..3 {
            let scaled = pixel[c] as f32 / 127.5 - 1.0;
            match layout {
                TensorLayout::Nhwc => tensor[[0, y, x, c]] = scaled,
                TensorLayout::Nchw => tensor[[0, c, y, x]] = scaled,
            }
        }
    }

    tensor
}
