//! Pessimistic estimator: the mean of WeightedLai and Reflective.
use ndarray::{Array1, Array2};

use crate::classifier::ClassifierFactory;
use crate::error::Result;
use crate::transform::{check_training_shapes, UpliftModel};
use crate::transform::lai::WeightedLai;
use crate::transform::reflective::Reflective;

/// Averages the scores of a WeightedLai and a Reflective sub-estimator fit
/// on the same data.
///
/// The two sub-estimators own entirely independent delegate instances,
/// built from the same factory; they share configuration, never trained
/// state.
pub struct Pessimistic {
    weighted_lai: WeightedLai,
    reflective: Reflective,
}

impl Pessimistic {
    pub fn new(delegates: &dyn ClassifierFactory) -> Self {
        Pessimistic {
            weighted_lai: WeightedLai::new(delegates.build()),
            reflective: Reflective::new(delegates.build()),
        }
    }
}

impl UpliftModel for Pessimistic {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>, t: &Array1<f64>) -> Result<()> {
        check_training_shapes(x, y, t)?;
        self.weighted_lai.fit(x, y, t)?;
        self.reflective.fit(x, y, t)?;
        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let w_lai = self.weighted_lai.predict(x)?;
        let reflective = self.reflective.predict(x)?;
        Ok((w_lai + reflective) / 2.0)
    }

    fn name(&self) -> &str {
        "pessimistic"
    }
}
