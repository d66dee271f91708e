//! Lai-style binary-collapsed estimators.
//!
//! These collapse the four quadrants into "aligned" (TR∨CN) vs
//! "misaligned" (TN∨CR) and train a binary delegate. The unweighted rule
//! rescales the aligned probability to `2p - 1`, a strictly monotonic map
//! from [0, 1] onto [-1, 1]; the weighted rule multiplies each side by its
//! empirical class share instead.
use ndarray::{Array1, Array2};

use crate::classifier::ProbabilisticClassifier;
use crate::error::Result;
use crate::priors::ClassShares;
use crate::quadrant::encode_binary;
use crate::transform::{check_proba_shape, check_training_shapes, UpliftModel};

pub struct Lai {
    model: Box<dyn ProbabilisticClassifier>,
    fitted: bool,
}

/// The Jaskowski estimator is the same transformation and score rule as
/// Lai, published independently under its own name.
pub type Jaskowski = Lai;

impl Lai {
    pub fn new(model: Box<dyn ProbabilisticClassifier>) -> Self {
        Lai {
            model,
            fitted: false,
        }
    }
}

impl UpliftModel for Lai {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>, t: &Array1<f64>) -> Result<()> {
        self.fitted = false;
        check_training_shapes(x, y, t)?;
        let labels = encode_binary(y, t)?;
        log::debug!(
            "lai: fitting {} on {} samples, {} features",
            self.model.name(),
            x.nrows(),
            x.ncols()
        );
        self.model.fit(x, &labels)?;
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        if !self.fitted {
            return Err(crate::error::UpliftError::NotFitted("Lai"));
        }
        let proba = self.model.predict_proba(x)?;
        check_proba_shape(&proba, x.nrows(), 2)?;
        let scores = proba.outer_iter().map(|row| 2.0 * row[1] - 1.0).collect();
        Ok(Array1::from_vec(scores))
    }

    fn name(&self) -> &str {
        "lai"
    }
}

pub struct WeightedLai {
    model: Box<dyn ProbabilisticClassifier>,
    shares: Option<ClassShares>,
}

impl WeightedLai {
    pub fn new(model: Box<dyn ProbabilisticClassifier>) -> Self {
        WeightedLai {
            model,
            shares: None,
        }
    }
}

impl UpliftModel for WeightedLai {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>, t: &Array1<f64>) -> Result<()> {
        self.shares = None;
        check_training_shapes(x, y, t)?;
        let labels = encode_binary(y, t)?;
        let shares = ClassShares::from_observations(y, t)?;
        log::debug!(
            "weighted_lai: fitting {} on {} samples (p_pos={:.4}, p_neg={:.4})",
            self.model.name(),
            x.nrows(),
            shares.p_pos,
            shares.p_neg
        );
        self.model.fit(x, &labels)?;
        self.shares = Some(shares);
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let shares = self
            .shares
            .ok_or(crate::error::UpliftError::NotFitted("WeightedLai"))?;
        let proba = self.model.predict_proba(x)?;
        check_proba_shape(&proba, x.nrows(), 2)?;
        let scores = proba
            .outer_iter()
            .map(|row| row[1] * shares.p_pos - row[0] * shares.p_neg)
            .collect();
        Ok(Array1::from_vec(scores))
    }

    fn name(&self) -> &str {
        "weighted_lai"
    }
}
