//! Kane and generalized Kane estimators.
//!
//! Both train a four-class delegate on the quadrant labels. Kane scores a
//! sample as `(p_TR + p_CN) - (p_TN + p_CR)`; since the four probabilities
//! sum to 1, the score is bounded in [-1, 1]. The generalized form divides
//! each term by its group size, `(p_TR/n_T + p_CN/n_C) - (p_TN/n_T +
//! p_CR/n_C)`, which compensates for unbalanced treatment assignment.
use ndarray::{Array1, Array2};

use crate::classifier::ProbabilisticClassifier;
use crate::error::Result;
use crate::priors::GroupCounts;
use crate::quadrant::encode_four_class;
use crate::transform::{check_proba_shape, check_training_shapes, UpliftModel};

pub struct Kane {
    model: Box<dyn ProbabilisticClassifier>,
    fitted: bool,
}

impl Kane {
    pub fn new(model: Box<dyn ProbabilisticClassifier>) -> Self {
        Kane {
            model,
            fitted: false,
        }
    }
}

impl UpliftModel for Kane {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>, t: &Array1<f64>) -> Result<()> {
        self.fitted = false;
        check_training_shapes(x, y, t)?;
        let labels = encode_four_class(y, t)?;
        log::debug!(
            "kane: fitting {} on {} samples, {} features",
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
            return Err(crate::error::UpliftError::NotFitted("Kane"));
        }
        let proba = self.model.predict_proba(x)?;
        check_proba_shape(&proba, x.nrows(), 4)?;
        let scores = proba
            .outer_iter()
            .map(|row| (row[0] + row[1]) - (row[2] + row[3]))
            .collect();
        Ok(Array1::from_vec(scores))
    }

    fn name(&self) -> &str {
        "kane"
    }
}

pub struct GeneralizedKane {
    model: Box<dyn ProbabilisticClassifier>,
    counts: Option<GroupCounts>,
}

impl GeneralizedKane {
    pub fn new(model: Box<dyn ProbabilisticClassifier>) -> Self {
        GeneralizedKane {
            model,
            counts: None,
        }
    }
}

impl UpliftModel for GeneralizedKane {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>, t: &Array1<f64>) -> Result<()> {
        self.counts = None;
        check_training_shapes(x, y, t)?;
        // An empty treated or control group would make the score divide by
        // zero, so it is rejected here rather than at predict time.
        let counts = GroupCounts::from_treatment(t)?;
        let labels = encode_four_class(y, t)?;
        log::debug!(
            "generalized_kane: fitting {} on {} samples ({} treated, {} control)",
            self.model.name(),
            x.nrows(),
            counts.treated,
            counts.control
        );
        self.model.fit(x, &labels)?;
        self.counts = Some(counts);
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let counts = self
            .counts
            .ok_or(crate::error::UpliftError::NotFitted("GeneralizedKane"))?;
        let proba = self.model.predict_proba(x)?;
        check_proba_shape(&proba, x.nrows(), 4)?;
        let n_t = counts.treated as f64;
        let n_c = counts.control as f64;
        let scores = proba
            .outer_iter()
            .map(|row| (row[0] / n_t + row[1] / n_c) - (row[2] / n_t + row[3] / n_c))
            .collect();
        Ok(Array1::from_vec(scores))
    }

    fn name(&self) -> &str {
        "generalized_kane"
    }
}
