//! Seeded train/test splitting and treatment cross-validation.
use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Result, UpliftError};
use crate::metrics::average_effect;
use crate::transform::UpliftModel;

/// Split row indexes into train and test, stratified on the outcome.
///
/// Zero-outcome and nonzero-outcome rows are sampled separately so both
/// splits keep the training set's response rate: each group contributes
/// `floor(group_len * train_share)` rows to the train split. Both returned
/// index lists are sorted ascending. The same `seed` reproduces the same
/// split.
pub fn train_test_split_indexes(
    y: &Array1<f64>,
    train_share: f64,
    seed: Option<u64>,
) -> Result<(Vec<usize>, Vec<usize>)> {
    if !(0.0..=1.0).contains(&train_share) {
        return Err(UpliftError::Data(format!(
            "train_share must be in [0, 1], got {}",
            train_share
        )));
    }
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let mut zeros: Vec<usize> = Vec::new();
    let mut non_zeros: Vec<usize> = Vec::new();
    for (i, &yi) in y.iter().enumerate() {
        if yi == 0.0 {
            zeros.push(i);
        } else {
            non_zeros.push(i);
        }
    }

    let mut train = Vec::new();
    for group in [&mut zeros, &mut non_zeros] {
        group.shuffle(&mut rng);
        let take = (group.len() as f64 * train_share).floor() as usize;
        train.extend_from_slice(&group[..take]);
    }
    train.sort_unstable();

    let mut in_train = vec![false; y.len()];
    for &i in &train {
        in_train[i] = true;
    }
    let test: Vec<usize> = (0..y.len()).filter(|&i| !in_train[i]).collect();
    Ok((train, test))
}

/// Materialize a stratified train/test split of `(X, y, t)`.
///
/// Returns `((x_train, y_train, t_train), (x_test, y_test, t_test))`.
#[allow(clippy::type_complexity)]
pub fn train_test_split(
    x: &Array2<f64>,
    y: &Array1<f64>,
    t: &Array1<f64>,
    train_share: f64,
    seed: Option<u64>,
) -> Result<(
    (Array2<f64>, Array1<f64>, Array1<f64>),
    (Array2<f64>, Array1<f64>, Array1<f64>),
)> {
    crate::transform::check_training_shapes(x, y, t)?;
    let (train_idx, test_idx) = train_test_split_indexes(y, train_share, seed)?;
    let take = |idx: &[usize]| {
        (
            x.select(Axis(0), idx),
            y.select(Axis(0), idx),
            t.select(Axis(0), idx),
        )
    };
    Ok((take(&train_idx), take(&test_idx)))
}

/// Evaluate an uplift model by repeated split → fit → predict → rank.
///
/// Runs `cv` rounds; each round draws a fresh stratified split, refits
/// `model` on the train part and scores the test part with
/// [`average_effect`] at `top_share`. When `seeds` is given it must hold
/// one seed per round.
pub fn treatment_cross_val_score(
    x: &Array2<f64>,
    y: &Array1<f64>,
    t: &Array1<f64>,
    model: &mut dyn UpliftModel,
    cv: usize,
    train_share: f64,
    top_share: f64,
    seeds: Option<&[u64]>,
) -> Result<Vec<f64>> {
    if let Some(seeds) = seeds {
        if seeds.len() != cv {
            return Err(UpliftError::ShapeMismatch {
                expected: cv,
                got: seeds.len(),
                what: "seeds array",
            });
        }
    }

    let mut scores = Vec::with_capacity(cv);
    for fold in 0..cv {
        let seed = seeds.map(|s| s[fold]);
        let ((x_train, y_train, t_train), (x_test, y_test, t_test)) =
            train_test_split(x, y, t, train_share, seed)?;
        model.fit(&x_train, &y_train, &t_train)?;
        let y_pred = model.predict(&x_test)?;
        let score = average_effect(&y_test, &t_test, &y_pred, top_share)?;
        log::debug!(
            "{}: fold {} of {} scored {:.6}",
            model.name(),
            fold + 1,
            cv,
            score
        );
        scores.push(score);
    }
    Ok(scores)
}
