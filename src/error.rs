use std::error::Error;
use std::fmt;

/// Custom error type for uplift estimation failures.
///
/// Each variant names the precondition that was violated, so a caller can
/// distinguish "bad configuration" from "bad data" from "used out of order".
#[derive(Debug)]
pub enum UpliftError {
    /// An estimator, factory or delegate was configured with something unusable.
    Configuration(String),
    /// `predict` was called on an estimator before a successful `fit`.
    NotFitted(&'static str),
    /// Training or evaluation data is degenerate for the requested statistic.
    Data(String),
    /// Parallel input arrays disagree in length.
    ShapeMismatch {
        expected: usize,
        got: usize,
        what: &'static str,
    },
}

impl fmt::Display for UpliftError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UpliftError::Configuration(msg) => write!(f, "configuration error: {}", msg),
            UpliftError::NotFitted(name) => {
                write!(f, "{} must be fit before calling predict", name)
            }
            UpliftError::Data(msg) => write!(f, "data error: {}", msg),
            UpliftError::ShapeMismatch {
                expected,
                got,
                what,
            } => write!(
                f,
                "shape mismatch: {} has length {} but {} was expected",
                what, got, expected
            ),
        }
    }
}

impl Error for UpliftError {}

pub type Result<T> = std::result::Result<T, UpliftError>;
