//! Ranking-based evaluation of uplift scores.
use ndarray::Array1;

use crate::error::{Result, UpliftError};

/// Estimate the average incremental effect within the top-scored slice.
///
/// Observations are sorted by predicted score descending (ties broken by
/// original index, so the sort is stable), the first
/// `min(floor(top_share * n) + 1, n)` rows are taken — the inclusive
/// boundary of the reference procedure — and the result is
/// `mean(outcome | treated) - mean(outcome | control)` within that slice.
/// A slice with no treated or no control rows uses 0 for the missing group
/// mean instead of failing, so the metric degrades gracefully on small
/// slices.
///
/// `top_share` must lie in `(0, 1]`; NaN scores are rejected because they
/// have no rank.
pub fn average_effect(
    y_true: &Array1<f64>,
    t_true: &Array1<f64>,
    y_pred: &Array1<f64>,
    top_share: f64,
) -> Result<f64> {
    let n = y_true.len();
    if t_true.len() != n {
        return Err(UpliftError::ShapeMismatch {
            expected: n,
            got: t_true.len(),
            what: "treatment vector t_true",
        });
    }
    if y_pred.len() != n {
        return Err(UpliftError::ShapeMismatch {
            expected: n,
            got: y_pred.len(),
            what: "prediction vector y_pred",
        });
    }
    if !(top_share > 0.0 && top_share <= 1.0) {
        return Err(UpliftError::Data(format!(
            "top_share must be in (0, 1], got {}",
            top_share
        )));
    }
    let nan_count = y_pred.iter().filter(|v| v.is_nan()).count();
    if nan_count > 0 {
        return Err(UpliftError::Data(format!(
            "found {} NaN values in predicted scores",
            nan_count
        )));
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        y_pred[b]
            .partial_cmp(&y_pred[a])
            .expect("NaN scores were rejected above")
            .then(a.cmp(&b))
    });

    let slice_len = ((top_share * n as f64).floor() as usize + 1).min(n);
    let mut treated_sum = 0.0;
    let mut treated_count = 0usize;
    let mut control_sum = 0.0;
    let mut control_count = 0usize;
    for &i in order.iter().take(slice_len) {
        if t_true[i] != 0.0 {
            treated_sum += y_true[i];
            treated_count += 1;
        } else {
            control_sum += y_true[i];
            control_count += 1;
        }
    }

    let treated_mean = if treated_count > 0 {
        treated_sum / treated_count as f64
    } else {
        0.0
    };
    let control_mean = if control_count > 0 {
        control_sum / control_count as f64
    } else {
        0.0
    };
    Ok(treated_mean - control_mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_includes_one_row_past_the_floor_boundary() {
        // n=10, top_share=0.3 → floor is 3, slice is 4 rows
        let y_pred = Array1::from_vec((0..10).rev().map(|v| v as f64).collect());
        let y_true = Array1::from_vec(vec![4.0, 2.0, 6.0, 8.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let t_true = Array1::from_vec(vec![1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
        // Top 4 rows: treated mean (4+6)/2, control mean (2+8)/2
        let effect = average_effect(&y_true, &t_true, &y_pred, 0.3).unwrap();
        assert!((effect - 0.0).abs() < 1e-12);
    }

    #[test]
    fn ties_keep_original_index_order() {
        let y_pred = Array1::from_vec(vec![1.0, 1.0, 1.0]);
        let y_true = Array1::from_vec(vec![5.0, 9.0, 9.0]);
        let t_true = Array1::from_vec(vec![1.0, 0.0, 0.0]);
        // floor(0.1*3)+1 = 1 → only the first row survives the tie-break
        let effect = average_effect(&y_true, &t_true, &y_pred, 0.1).unwrap();
        assert!((effect - 5.0).abs() < 1e-12);
    }
}
