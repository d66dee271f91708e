//! Fit-time prior statistics used by the weighted combination rules.
//!
//! Every prior is computed once from the full training set and held fixed
//! for the fitted estimator's lifetime; a refit overwrites it wholesale.
//! All ratios are built from element counts, never from value sums, so
//! control rows coded as literal `0.0` count like any other row.
use ndarray::Array1;

use crate::error::{Result, UpliftError};
use crate::quadrant::Quadrant;

/// Shares of the aligned/misaligned classes in a binary-encoded training set.
#[derive(Debug, Clone, Copy)]
pub struct ClassShares {
    /// Share of aligned rows (TR∨CN).
    pub p_pos: f64,
    /// Share of misaligned rows (TN∨CR). `p_pos + p_neg == 1`.
    pub p_neg: f64,
}

impl ClassShares {
    pub fn from_observations(y: &Array1<f64>, t: &Array1<f64>) -> Result<ClassShares> {
        let mut pos = 0usize;
        let mut neg = 0usize;
        for (&yi, &ti) in y.iter().zip(t.iter()) {
            if Quadrant::of(yi, ti)?.is_aligned() {
                pos += 1;
            } else {
                neg += 1;
            }
        }
        let total = pos + neg;
        if total == 0 {
            return Err(UpliftError::Data(
                "cannot estimate class shares from an empty training set".to_string(),
            ));
        }
        Ok(ClassShares {
            p_pos: pos as f64 / total as f64,
            p_neg: neg as f64 / total as f64,
        })
    }
}

/// Treated and control group sizes over the training set.
#[derive(Debug, Clone, Copy)]
pub struct GroupCounts {
    pub treated: usize,
    pub control: usize,
}

impl GroupCounts {
    /// Count treated (t≠0) and control (t=0) rows.
    ///
    /// Errors if either group is empty: the generalized score divides by
    /// both counts, and a zero denominator is a data problem to surface at
    /// fit time rather than a division to let through.
    pub fn from_treatment(t: &Array1<f64>) -> Result<GroupCounts> {
        let mut treated = 0usize;
        let mut control = 0usize;
        for &ti in t.iter() {
            if ti.is_nan() {
                return Err(UpliftError::Data(
                    "treatment vector contains NaN".to_string(),
                ));
            }
            if ti != 0.0 {
                treated += 1;
            } else {
                control += 1;
            }
        }
        if treated == 0 {
            return Err(UpliftError::Data(
                "training set contains no treated observations (t != 0)".to_string(),
            ));
        }
        if control == 0 {
            return Err(UpliftError::Data(
                "training set contains no control observations (t == 0)".to_string(),
            ));
        }
        Ok(GroupCounts { treated, control })
    }
}

/// Conditional treatment probabilities given response status.
///
/// `R` is the responder set (y≠0), `N` the non-responder set (y=0).
#[derive(Debug, Clone, Copy)]
pub struct ConditionalPriors {
    /// p(T|R): probability of treatment among responders.
    pub p_t_given_r: f64,
    /// p(C|R) = 1 - p(T|R).
    pub p_c_given_r: f64,
    /// p(T|N): probability of treatment among non-responders.
    pub p_t_given_n: f64,
    /// p(C|N) = 1 - p(T|N).
    pub p_c_given_n: f64,
}

impl ConditionalPriors {
    pub fn from_observations(y: &Array1<f64>, t: &Array1<f64>) -> Result<ConditionalPriors> {
        let mut t_r = 0usize;
        let mut c_r = 0usize;
        let mut t_n = 0usize;
        let mut c_n = 0usize;
        for (&yi, &ti) in y.iter().zip(t.iter()) {
            match Quadrant::of(yi, ti)? {
                Quadrant::TreatmentResponder => t_r += 1,
                Quadrant::ControlResponder => c_r += 1,
                Quadrant::TreatmentNonResponder => t_n += 1,
                Quadrant::ControlNonResponder => c_n += 1,
            }
        }
        let responders = t_r + c_r;
        let non_responders = t_n + c_n;
        if responders == 0 {
            return Err(UpliftError::Data(
                "training set contains no responders (y != 0); p(T|R) is undefined".to_string(),
            ));
        }
        if non_responders == 0 {
            return Err(UpliftError::Data(
                "training set contains no non-responders (y == 0); p(T|N) is undefined"
                    .to_string(),
            ));
        }
        let p_t_given_r = t_r as f64 / responders as f64;
        let p_t_given_n = t_n as f64 / non_responders as f64;
        Ok(ConditionalPriors {
            p_t_given_r,
            p_c_given_r: 1.0 - p_t_given_r,
            p_t_given_n,
            p_c_given_n: 1.0 - p_t_given_n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_counts_count_elements_not_values() {
        // Control rows coded as literal zero still count as rows
        let t = Array1::from_vec(vec![0.0, 0.0, 1.0]);
        let counts = GroupCounts::from_treatment(&t).unwrap();
        assert_eq!(counts.control, 2);
        assert_eq!(counts.treated, 1);
    }

    #[test]
    fn group_counts_reject_one_sided_data() {
        let all_treated = Array1::from_vec(vec![1.0, 1.0]);
        assert!(GroupCounts::from_treatment(&all_treated).is_err());
        let all_control = Array1::from_vec(vec![0.0, 0.0]);
        assert!(GroupCounts::from_treatment(&all_control).is_err());
    }
}
