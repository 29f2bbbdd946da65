//! The heart curve: `y = |x|^(2/3) + a * sin(kx) * sqrt(3 - x^2)`
//!
//! The `|x|^(2/3)` term forms the base arch, `sin(kx)` adds the
//! oscillations that sculpt the heart as k grows, and the square-root
//! envelope pins the wave to zero at the domain edges.

use crate::error::{Error, Result};

/// Half-width of the valid domain: the formula requires `3 - x^2 >= 0`,
/// so x must lie in `[-sqrt(3), sqrt(3)]`.
pub const DOMAIN_HALF_WIDTH: f64 = 1.732_050_807_568_877_2;

/// Tolerance for accepting samples that sit on the domain boundary
/// after floating-point rounding.
const DOMAIN_EPSILON: f64 = 1e-9;

/// Generate `points` evenly spaced x samples spanning the full domain,
/// endpoints included.
pub fn sample_domain(points: usize) -> Vec<f64> {
    if points == 0 {
        return Vec::new();
    }
    if points == 1 {
        return vec![0.0];
    }
    let step = 2.0 * DOMAIN_HALF_WIDTH / (points - 1) as f64;
    (0..points)
        .map(|i| -DOMAIN_HALF_WIDTH + i as f64 * step)
        .collect()
}

/// Evaluate the heart curve at each x sample for the given k and wave
/// amplitude.
///
/// Returns one y per x, in matching order. Pure and deterministic:
/// identical inputs always produce bit-identical output. Samples outside
/// the closed domain fail with [`Error::Domain`]; inside it the envelope
/// clamps `3 - x^2` at zero so boundary rounding never yields NaN.
pub fn evaluate(xs: &[f64], k: f64, amplitude: f64) -> Result<Vec<f64>> {
    let mut ys = Vec::with_capacity(xs.len());
    for &x in xs {
        if !x.is_finite() || x.abs() > DOMAIN_HALF_WIDTH + DOMAIN_EPSILON {
            return Err(Error::Domain { x });
        }
        let base = x.abs().powf(2.0 / 3.0);
        let envelope = (3.0 - x * x).max(0.0).sqrt();
        ys.push(base + amplitude * (k * x).sin() * envelope);
    }
    Ok(ys)
}
