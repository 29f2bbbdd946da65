//! Pure easing functions mapping progress in [0, 1] to eased progress
//! in [0, 1].

use serde::{Deserialize, Serialize};

/// Easing curve applied to build progress before computing k.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingKind {
    /// Hermite smoothstep: `f(t) = 3t^2 - 2t^3`. Starts slow, accelerates
    /// through the middle, decelerates at the end.
    #[default]
    Smoothstep,
    /// Identity: `f(t) = t`.
    Linear,
}

impl EasingKind {
    /// Apply the easing function to a progress value.
    ///
    /// Input is clamped to [0, 1] first; the result stays in [0, 1].
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingKind::Smoothstep => t * t * (3.0 - 2.0 * t),
            EasingKind::Linear => t,
        }
    }
}
