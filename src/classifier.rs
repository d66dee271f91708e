//! The delegate classifier contract.
//!
//! The transformation estimators do not implement any classifier
//! themselves; they train and query an externally supplied probabilistic
//! model through this trait. Conformance is enforced by the type system at
//! construction, so a delegate missing a capability is a compile error
//! rather than a runtime surprise.
use ndarray::{Array1, Array2};

use crate::error::{Result, UpliftError};

/// Capability contract for the pluggable probabilistic classifier.
///
/// Column `j` of `predict_proba`'s output must correspond to class id `j`
/// as assigned by [`crate::quadrant`] for the variant's label cardinality
/// (0..3 for four-class variants, 0/1 for binary variants), and every row
/// must be a probability distribution. A delegate that violates either
/// part produces silently wrong scores, so integrations should pin both
/// with tests (see [`check_row_stochastic`]).
pub trait ProbabilisticClassifier {
    /// Train on a feature matrix and an encoded class-label vector.
    fn fit(&mut self, x: &Array2<f64>, labels: &Array1<usize>) -> Result<()>;

    /// Per-sample class probabilities, shape `(n_samples, n_classes)`.
    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>>;

    /// Optional human readable name for the delegate.
    fn name(&self) -> &str {
        "classifier"
    }
}

/// Builds a fresh delegate instance per call.
///
/// Estimators that own more than one delegate (and the variant factory)
/// construct each one through this trait, so no two estimators ever share
/// a delegate instance or its trained state.
pub trait ClassifierFactory {
    fn build(&self) -> Box<dyn ProbabilisticClassifier>;
}

impl<F> ClassifierFactory for F
where
    F: Fn() -> Box<dyn ProbabilisticClassifier>,
{
    fn build(&self) -> Box<dyn ProbabilisticClassifier> {
        self()
    }
}

/// Verify that a probability matrix honors the delegate contract: every
/// entry in `[0, 1]` and every row summing to 1 within `tol`.
///
/// The estimators do not run this on the prediction path; it exists for
/// integration tests that pin a concrete delegate to the contract.
pub fn check_row_stochastic(proba: &Array2<f64>, tol: f64) -> Result<()> {
    for (i, row) in proba.outer_iter().enumerate() {
        let mut sum = 0.0;
        for &p in row.iter() {
            if !(0.0..=1.0).contains(&p) {
                return Err(UpliftError::Configuration(format!(
                    "delegate probability {} in row {} is outside [0, 1]",
                    p, i
                )));
            }
            sum += p;
        }
        if (sum - 1.0).abs() > tol {
            return Err(UpliftError::Configuration(format!(
                "delegate probability row {} sums to {} instead of 1",
                i, sum
            )));
        }
    }
    Ok(())
}
