//! Transformation uplift estimators.
//!
//! Each variant relabels the training set via [`crate::quadrant`], trains
//! its delegate classifier on the relabeled data, and turns predicted class
//! probabilities into a signed uplift score with its own algebraic
//! combination rule. The variants share no base implementation; they
//! compose the same labeling and prior-estimation helpers.
pub mod factory;
pub mod kane;
pub mod lai;
pub mod pessimistic;
pub mod reflective;

pub use factory::{build_variant, VariantKind};
pub use kane::{GeneralizedKane, Kane};
pub use lai::{Jaskowski, Lai, WeightedLai};
pub use pessimistic::Pessimistic;
pub use reflective::Reflective;

use ndarray::{Array1, Array2};

use crate::error::{Result, UpliftError};

/// Two-phase estimator contract shared by every transformation variant.
///
/// `fit` encodes labels, estimates whatever priors the variant needs and
/// trains the delegate; `predict` combines the delegate's class
/// probabilities into one signed score per sample. `predict` before a
/// successful `fit` is a state error, and a refit discards all prior
/// state before anything else happens.
pub trait UpliftModel {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>, t: &Array1<f64>) -> Result<()>;

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>>;

    /// Human readable estimator name.
    fn name(&self) -> &str {
        "uplift"
    }
}

pub(crate) fn check_training_shapes(
    x: &Array2<f64>,
    y: &Array1<f64>,
    t: &Array1<f64>,
) -> Result<()> {
    if y.len() != x.nrows() {
        return Err(UpliftError::ShapeMismatch {
            expected: x.nrows(),
            got: y.len(),
            what: "outcome vector y",
        });
    }
    if t.len() != x.nrows() {
        return Err(UpliftError::ShapeMismatch {
            expected: x.nrows(),
            got: t.len(),
            what: "treatment vector t",
        });
    }
    Ok(())
}

/// Shape check for a delegate's probability output. A wrong column count
/// means the delegate was trained for a different label cardinality than
/// the variant encodes, which is a configuration problem, not a data one.
pub(crate) fn check_proba_shape(proba: &Array2<f64>, n: usize, k: usize) -> Result<()> {
    if proba.nrows() != n {
        return Err(UpliftError::ShapeMismatch {
            expected: n,
            got: proba.nrows(),
            what: "delegate probability rows",
        });
    }
    if proba.ncols() != k {
        return Err(UpliftError::Configuration(format!(
            "delegate returned {} probability columns but this variant encodes {} classes",
            proba.ncols(),
            k
        )));
    }
    Ok(())
}
