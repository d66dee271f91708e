//! Reflective estimator.
//!
//! A four-class variant that reweights each quadrant probability by the
//! empirical conditional probability of its treatment arm given its
//! response status: `(p(T|R)·p_TR + p(C|N)·p_CN) - (p(T|N)·p_TN +
//! p(C|R)·p_CR)`.
use ndarray::{Array1, Array2};

use crate::classifier::ProbabilisticClassifier;
use crate::error::Result;
use crate::priors::ConditionalPriors;
use crate::quadrant::encode_four_class;
use crate::transform::{check_proba_shape, check_training_shapes, UpliftModel};

pub struct Reflective {
    model: Box<dyn ProbabilisticClassifier>,
    priors: Option<ConditionalPriors>,
}

impl Reflective {
    pub fn new(model: Box<dyn ProbabilisticClassifier>) -> Self {
        Reflective {
            model,
            priors: None,
        }
    }
}

impl UpliftModel for Reflective {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>, t: &Array1<f64>) -> Result<()> {
        self.priors = None;
        check_training_shapes(x, y, t)?;
        let labels = encode_four_class(y, t)?;
        // Undefined when the training set has no responders or no
        // non-responders; surfaced here, never deferred to predict.
        let priors = ConditionalPriors::from_observations(y, t)?;
        log::debug!(
            "reflective: fitting {} on {} samples (p(T|R)={:.4}, p(T|N)={:.4})",
            self.model.name(),
            x.nrows(),
            priors.p_t_given_r,
            priors.p_t_given_n
        );
        self.model.fit(x, &labels)?;
        self.priors = Some(priors);
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let priors = self
            .priors
            .ok_or(crate::error::UpliftError::NotFitted("Reflective"))?;
        let proba = self.model.predict_proba(x)?;
        check_proba_shape(&proba, x.nrows(), 4)?;
        let scores = proba
            .outer_iter()
            .map(|row| {
                let pos = priors.p_t_given_r * row[0] + priors.p_c_given_n * row[1];
                let neg = priors.p_t_given_n * row[2] + priors.p_c_given_r * row[3];
                pos - neg
            })
            .collect();
        Ok(Array1::from_vec(scores))
    }

    fn name(&self) -> &str {
        "reflective"
    }
}
