//! Timing curves for markers in motion.
//!
//! The named curves are the CSS cubic béziers the site's packet transitions were tuned with.

/// Easing applied to a marker's elapsed fraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    Linear,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`: slow departure and slow arrival.
    #[default]
    EaseInOut,
    /// `cubic-bezier(0, 0, 0.58, 1)`: full speed off the wire, settling on arrival.
    EaseOut,
}

const SOLVE_ITERATIONS: usize = 48;

impl Ease {
    /// Eased value for `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => cubic_bezier((0.42, 0.0), (0.58, 1.0), t),
            Self::EaseOut => cubic_bezier((0.0, 0.0), (0.58, 1.0), t),
        }
    }
}

/// `y` on the curve through `(0, 0)`, `p1`, `p2`, `(1, 1)` at horizontal position `x`.
///
/// Control x-coordinates inside `[0, 1]` keep `x(s)` monotonic, so bisection on the curve
/// parameter converges.
fn cubic_bezier(p1: (f64, f64), p2: (f64, f64), x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    for _ in 0..SOLVE_ITERATIONS {
        let s = (lo + hi) / 2.0;
        if bezier_axis(p1.0, p2.0, s) < x {
            lo = s;
        } else {
            hi = s;
        }
    }
    bezier_axis(p1.1, p2.1, (lo + hi) / 2.0)
}

fn bezier_axis(c1: f64, c2: f64, s: f64) -> f64 {
    let r = 1.0 - s;
    3.0 * r * r * s * c1 + 3.0 * r * s * s * c2 + s * s * s
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
