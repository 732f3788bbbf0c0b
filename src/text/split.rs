// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Deterministic train/test split

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::TextError;

/// Documents and targets partitioned into train and test halves
#[derive(Debug, Clone, Default)]
pub struct TrainTestSplit {
    pub train_documents: Vec<String>,
    pub train_targets: Vec<usize>,
    pub test_documents: Vec<String>,
    pub test_targets: Vec<usize>,
}

/// Shuffle with a seeded RNG and hold out `ceil(n * test_size)` samples
///
/// The same seed always yields the same partition for the same input.
pub fn train_test_split(
    documents: &[String],
    targets: &[usize],
    test_size: f64,
    seed: u64,
) -> Result<TrainTestSplit, TextError> {
    if documents.len() != targets.len() {
        return Err(TextError::LengthMismatch {
            documents: documents.len(),
            targets: targets.len(),
        });
    }
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(TextError::InvalidSplit(format!(
            "test_size must be in (0, 1), got {}",
            test_size
        )));
    }

    let n = documents.len();
    let n_test = (n as f64 * test_size).ceil() as usize;
    if n_test == 0 || n_test >= n {
        return Err(TextError::InvalidSplit(format!(
            "cannot hold out {} of {} samples",
            n_test, n
        )));
    }

    let mut order: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    let mut split = TrainTestSplit::default();
    for (position, &index) in order.iter().enumerate() {
        if position < n_test {
            split.test_documents.push(documents[index].clone());
            split.test_targets.push(targets[index]);
        } else {
            split.train_documents.push(documents[index].clone());
            split.train_targets.push(targets[index]);
        }
    }

    Ok(split)
}
