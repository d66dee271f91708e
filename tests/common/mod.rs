//! Stub delegate classifiers shared by the integration tests.
//!
//! The estimators only see the `ProbabilisticClassifier` contract, so the
//! tests drive them with hand-built delegates whose probability output is
//! known exactly.
#![allow(dead_code)]

use ndarray::{Array1, Array2};
use uplift_transform::classifier::ProbabilisticClassifier;
use uplift_transform::error::{Result, UpliftError};

/// Memorizes its training labels and answers with one-hot rows.
///
/// Only valid when `predict_proba` is called with the training matrix (or
/// any matrix with the same row order) — exactly the "perfect classifier"
/// the spec scenarios need. The class count adapts to the labels seen, so
/// the same stub serves binary and four-class variants.
pub struct MemorizingOneHot {
    n_classes: usize,
    labels: Option<Vec<usize>>,
}

impl MemorizingOneHot {
    pub fn new() -> Self {
        MemorizingOneHot {
            n_classes: 0,
            labels: None,
        }
    }
}

impl ProbabilisticClassifier for MemorizingOneHot {
    fn fit(&mut self, _x: &Array2<f64>, labels: &Array1<usize>) -> Result<()> {
        self.n_classes = labels.iter().max().map(|&m| m + 1).unwrap_or(0);
        self.labels = Some(labels.to_vec());
        Ok(())
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        let labels = self
            .labels
            .as_ref()
            .ok_or(UpliftError::NotFitted("MemorizingOneHot"))?;
        assert_eq!(x.nrows(), labels.len(), "stub only replays its training set");
        let mut proba = Array2::zeros((labels.len(), self.n_classes));
        for (i, &label) in labels.iter().enumerate() {
            proba[(i, label)] = 1.0;
        }
        Ok(proba)
    }

    fn name(&self) -> &str {
        "memorizing_one_hot"
    }
}

/// Learns only the training-set class shares and predicts them as a
/// constant distribution for every sample. Works on any prediction input,
/// which makes it the delegate of choice for split/cross-validation tests.
pub struct SharePredictor {
    shares: Option<Vec<f64>>,
}

impl SharePredictor {
    pub fn new() -> Self {
        SharePredictor { shares: None }
    }
}

impl ProbabilisticClassifier for SharePredictor {
    fn fit(&mut self, _x: &Array2<f64>, labels: &Array1<usize>) -> Result<()> {
        let n_classes = labels.iter().max().map(|&m| m + 1).unwrap_or(0);
        let mut counts = vec![0usize; n_classes];
        for &label in labels.iter() {
            counts[label] += 1;
        }
        let total = labels.len() as f64;
        self.shares = Some(counts.iter().map(|&c| c as f64 / total).collect());
        Ok(())
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        let shares = self
            .shares
            .as_ref()
            .ok_or(UpliftError::NotFitted("SharePredictor"))?;
        let mut rows = Vec::with_capacity(x.nrows() * shares.len());
        for _ in 0..x.nrows() {
            rows.extend_from_slice(shares);
        }
        Ok(Array2::from_shape_vec((x.nrows(), shares.len()), rows).unwrap())
    }

    fn name(&self) -> &str {
        "share_predictor"
    }
}

/// Ignores training entirely and replays fixed probability rows. With a
/// single row it tiles that row over every sample; with several rows the
/// prediction input must have the same row count.
pub struct FixedProba {
    rows: Vec<Vec<f64>>,
}

impl FixedProba {
    pub fn constant(row: Vec<f64>) -> Self {
        FixedProba { rows: vec![row] }
    }

    pub fn rows(rows: Vec<Vec<f64>>) -> Self {
        assert!(!rows.is_empty());
        FixedProba { rows }
    }
}

impl ProbabilisticClassifier for FixedProba {
    fn fit(&mut self, _x: &Array2<f64>, _labels: &Array1<usize>) -> Result<()> {
        Ok(())
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        let k = self.rows[0].len();
        let mut data = Vec::with_capacity(x.nrows() * k);
        if self.rows.len() == 1 {
            for _ in 0..x.nrows() {
                data.extend_from_slice(&self.rows[0]);
            }
        } else {
            assert_eq!(x.nrows(), self.rows.len());
            for row in &self.rows {
                data.extend_from_slice(row);
            }
        }
        Ok(Array2::from_shape_vec((x.nrows(), k), data).unwrap())
    }

    fn name(&self) -> &str {
        "fixed_proba"
    }
}
