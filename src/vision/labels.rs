// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! ImageNet class index loading

use std::collections::HashMap;
use std::path::Path;

use super::VisionError;

/// One ImageNet class: WordNet id and human-readable name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageNetClass {
    pub wnid: String,
    pub description: String,
}

/// Class labels indexed by model output position
#[derive(Debug, Clone)]
pub struct ImageNetLabels {
    classes: Vec<ImageNetClass>,
}

impl ImageNetLabels {
    /// Load a Keras-style `imagenet_class_index.json`
    ///
    /// The file maps the stringified output index to `[wnid, description]`:
    /// `{"0": ["n01440764", "tench"], "1": ["n01443537", "goldfish"], ...}`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, VisionError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            VisionError::Labels(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, VisionError> {
        let index: HashMap<String, (String, String)> = serde_json::from_str(raw)
            .map_err(|e| VisionError::Labels(format!("invalid class index: {}", e)))?;

        let mut entries = Vec::with_capacity(index.len());
        for (key, (wnid, description)) in index {
            let position: usize = key
                .parse()
                .map_err(|_| VisionError::Labels(format!("non-numeric class index '{}'", key)))?;
            entries.push((position, ImageNetClass { wnid, description }));
        }
        entries.sort_by_key(|(position, _)| *position);

        // Positions must be exactly 0..n so they line up with the output tensor
        for (expected, (position, _)) in entries.iter().enumerate() {
            if *position != expected {
                return Err(VisionError::Labels(format!(
                    "class index is not contiguous: missing entry {}",
                    expected
                )));
            }
        }

        if entries.is_empty() {
            return Err(VisionError::Labels("class index is empty".to_string()));
        }

        Ok(Self {
            classes: entries.into_iter().map(|(_, class)| class).collect(),
        })
    }

    pub fn from_classes(classes: Vec<ImageNetClass>) -> Self {
        Self { classes }
    }

    pub fn get(&self, index: usize) -> Option<&ImageNetClass> {
        self.classes.get(index)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
