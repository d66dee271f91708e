//! uplift-transform: class-transformation uplift modeling.
//!
//! This crate estimates individual incremental treatment effect ("uplift")
//! from observational data by relabeling each observation into one of four
//! response×treatment quadrants, training an ordinary probabilistic
//! classifier on the relabeled data, and algebraically recombining the
//! predicted class probabilities into a signed uplift score.
//!
//! The design favors small, testable modules: the quadrant labeler and
//! prior estimators are plain functions and structs, the estimator variants
//! compose them with a pluggable delegate classifier, and the ranking-based
//! average-effect metric plus split/cross-validation helpers close the
//! evaluation loop.
pub mod classifier;
pub mod datasets;
pub mod error;
pub mod metrics;
pub mod model_selection;
pub mod priors;
pub mod quadrant;
pub mod transform;
