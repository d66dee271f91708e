//! Synthetic data generation for experiments and tests.
use ndarray::{Array1, Array2};
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use statrs::distribution::Normal;

use crate::error::{Result, UpliftError};

/// Parameters of the linear synthetic generator. Each `(mu, sigma)` pair
/// configures one Gaussian draw.
#[derive(Debug, Clone, Copy)]
pub struct LinearDataConfig {
    pub x1: (f64, f64),
    pub x2: (f64, f64),
    pub x3: (f64, f64),
    pub noise: (f64, f64),
    pub seed: u64,
}

impl Default for LinearDataConfig {
    fn default() -> Self {
        LinearDataConfig {
            x1: (0.0, 1.0),
            x2: (0.0, 0.5),
            x3: (0.0, 1.0),
            noise: (0.0, 0.1),
            seed: 777,
        }
    }
}

fn normal(params: (f64, f64)) -> Result<Normal> {
    Normal::new(params.0, params.1).map_err(|e| {
        UpliftError::Configuration(format!(
            "invalid normal parameters (mu={}, sigma={}): {}",
            params.0, params.1, e
        ))
    })
}

/// Generate `size` observations from the linear response model
/// `y' = x1 + x2*t + e`, thresholded to a binary outcome `y = [y' >= 1]`,
/// with `t` drawn uniformly from {0, 1} and `x3` a pure noise feature.
///
/// Returns `(X, y, t)` where `X` has columns `[x1, x2, x3]`. The same
/// config (including seed) reproduces the same data.
pub fn load_linear(
    size: usize,
    config: &LinearDataConfig,
) -> Result<(Array2<f64>, Array1<f64>, Array1<f64>)> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let d_x1 = normal(config.x1)?;
    let d_x2 = normal(config.x2)?;
    let d_x3 = normal(config.x3)?;
    let d_e = normal(config.noise)?;

    let mut features = Vec::with_capacity(size * 3);
    let mut y = Vec::with_capacity(size);
    let mut t = Vec::with_capacity(size);
    for _ in 0..size {
        let x1 = d_x1.sample(&mut rng);
        let x2 = d_x2.sample(&mut rng);
        let x3 = d_x3.sample(&mut rng);
        let ti = rng.gen_range(0..2) as f64;
        let e = d_e.sample(&mut rng);
        let y_latent = x1 + x2 * ti + e;
        features.extend_from_slice(&[x1, x2, x3]);
        y.push(if y_latent >= 1.0 { 1.0 } else { 0.0 });
        t.push(ti);
    }

    let x = Array2::from_shape_vec((size, 3), features).map_err(|e| {
        UpliftError::Data(format!("failed to assemble feature matrix: {}", e))
    })?;
    Ok((x, Array1::from_vec(y), Array1::from_vec(t)))
}
