//! Blend trait and easing curves used by interpolating scenes.

pub mod functions;

use serde::{Deserialize, Serialize};

use self::functions::{bezier_ease_t, lerp_array, lerp_f32};

/// Linear blend between two values of the same type.
///
/// Laws: `blend(a, b, 0.0) == a` and `blend(a, b, 1.0) == b` (within float
/// tolerance). `t` is not clamped; implementations extrapolate past the
/// endpoints for `t` outside [0,1].
pub trait Blend: Clone + 'static {
    fn blend(a: &Self, b: &Self, t: f32) -> Self;
}

impl Blend for f32 {
    #[inline]
    fn blend(a: &Self, b: &Self, t: f32) -> Self {
        lerp_f32(*a, *b, t)
    }
}

impl Blend for f64 {
    #[inline]
    fn blend(a: &Self, b: &Self, t: f32) -> Self {
        a + (b - a) * f64::from(t)
    }
}

impl<const N: usize> Blend for [f32; N] {
    #[inline]
    fn blend(a: &Self, b: &Self, t: f32) -> Self {
        lerp_array(a, b, t)
    }
}

/// Easing applied to the progress fraction before blending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "curve", rename_all = "snake_case")]
pub enum Ease {
    #[default]
    Linear,
    /// Cubic-bezier timing with control points (x1, y1, x2, y2).
    Bezier { ctrl: [f32; 4] },
}

impl Ease {
    /// Canonical ease-in-out control points.
    pub fn in_out() -> Self {
        Ease::Bezier {
            ctrl: [0.42, 0.0, 0.58, 1.0],
        }
    }

    /// Map raw progress to eased progress. Linear passes `t` through
    /// untouched (including values outside [0,1]); Bezier clamps to [0,1] as
    /// part of the curve inversion.
    #[inline]
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Ease::Linear => t,
            Ease::Bezier { ctrl } => bezier_ease_t(t, ctrl[0], ctrl[1], ctrl[2], ctrl[3]),
        }
    }
}
