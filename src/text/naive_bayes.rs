// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Multinomial naive Bayes over sparse TF-IDF rows

use super::tfidf::SparseVector;
use super::TextError;

/// Additive (Laplace) smoothing used when none is given
pub const DEFAULT_ALPHA: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct MultinomialNb {
    alpha: f64,
    class_log_prior: Vec<f64>,
    /// `[class][feature]` log probabilities
    feature_log_prob: Vec<Vec<f64>>,
}

impl Default for MultinomialNb {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}

impl MultinomialNb {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            class_log_prior: Vec::new(),
            feature_log_prob: Vec::new(),
        }
    }

    /// Fit class priors and per-class feature distributions
    ///
    /// `targets[i]` is the class of `rows[i]` and must be below `n_classes`.
    /// A class without samples keeps a prior of zero and is never predicted.
    pub fn fit(
        &mut self,
        rows: &[SparseVector],
        targets: &[usize],
        n_classes: usize,
        n_features: usize,
    ) -> Result<(), TextError> {
        if rows.is_empty() {
            return Err(TextError::EmptyCorpus);
        }
        if rows.len() != targets.len() {
            return Err(TextError::LengthMismatch {
                documents: rows.len(),
                targets: targets.len(),
            });
        }

        let mut class_count = vec![0usize; n_classes];
        let mut feature_count = vec![vec![0.0f64; n_features]; n_classes];

        for (row, &target) in rows.iter().zip(targets) {
            if target >= n_classes {
                return Err(TextError::UnknownTarget {
                    target,
                    classes: n_classes,
                });
            }
            class_count[target] += 1;
            for &(feature, value) in row {
                feature_count[target][feature] += value;
            }
        }

        let total = rows.len() as f64;
        self.class_log_prior = class_count
            .iter()
            .map(|&count| (count as f64 / total).ln())
            .collect();

        let smoothing = self.alpha * n_features as f64;
        self.feature_log_prob = feature_count
            .iter()
            .map(|counts| {
                let denominator = (counts.iter().sum::<f64>() + smoothing).ln();
                counts
                    .iter()
                    .map(|&c| (c + self.alpha).ln() - denominator)
                    .collect()
            })
            .collect();

        Ok(())
    }

    /// Joint log likelihood of `row` for every class
    pub fn joint_log_likelihood(&self, row: &SparseVector) -> Vec<f64> {
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_prob)| {
                prior
                    + row
                        .iter()
                        .map(|&(feature, value)| value * log_prob[feature])
                        .sum::<f64>()
            })
            .collect()
    }

    /// Most likely class; ties go to the lowest class index
    pub fn predict(&self, row: &SparseVector) -> usize {
        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (class, score) in self.joint_log_likelihood(row).into_iter().enumerate() {
            if score > best_score {
                best = class;
                best_score = score;
            }
        }
        best
    }
}
