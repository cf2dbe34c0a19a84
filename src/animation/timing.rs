//! Timing functions (easing curves) for timed transitions.
//!
//! A timing function maps normalized elapsed time to an interpolation factor.
//! Interactive (percent-driven) progress bypasses these curves entirely; they
//! only shape the timed portion of a transition.

use super::spring::SpringConfig;

/// Curve applied to normalized animation time.
#[derive(Clone, Debug, PartialEq)]
pub enum TimingFunction {
    /// Constant speed.
    Linear,
    /// Starts slow, ends fast.
    EaseIn,
    /// Starts fast, ends slow.
    EaseOut,
    /// Slow start and end, fast middle.
    EaseInOut,
    /// CSS-style cubic bezier curve (x1, y1, x2, y2).
    CubicBezier(f32, f32, f32, f32),
    /// Physics-based spring. Stepped with real elapsed time by the animator,
    /// not through [`TimingFunction::evaluate`].
    Spring(SpringConfig),
}

impl TimingFunction {
    /// Evaluate the curve at normalized time `t` in `[0, 1]`.
    ///
    /// Springs fall back to `t`; the animator steps them with real elapsed
    /// time instead.
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => t * t,
            TimingFunction::EaseOut => t * (2.0 - t),
            TimingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            TimingFunction::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, *x1, *y1, *x2, *y2),
            TimingFunction::Spring(_) => t,
        }
    }
}

/// Solve the bezier for y at the given x using Newton-Raphson.
fn cubic_bezier(x: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let mut t = x;
    for _ in 0..8 {
        let error = bezier_component(t, x1, x2) - x;
        let slope = bezier_slope(t, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        t -= error / slope;
    }
    bezier_component(t, y1, y2)
}

fn bezier_component(t: f32, c1: f32, c2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * c1 + 3.0 * mt * t * t * c2 + t * t * t
}

fn bezier_slope(t: f32, c1: f32, c2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * c1 + 6.0 * mt * t * (c2 - c1) + 3.0 * t * t * (1.0 - c2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_is_identity() {
        assert_eq!(TimingFunction::Linear.evaluate(0.0), 0.0);
        assert_eq!(TimingFunction::Linear.evaluate(0.5), 0.5);
        assert_eq!(TimingFunction::Linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_ease_in_starts_slow() {
        assert!(TimingFunction::EaseIn.evaluate(0.5) < 0.5);
    }

    #[test]
    fn test_ease_out_starts_fast() {
        assert!(TimingFunction::EaseOut.evaluate(0.5) > 0.5);
    }

    #[test]
    fn test_ease_in_out_endpoints() {
        let curve = TimingFunction::EaseInOut;
        assert!(curve.evaluate(0.0).abs() < 1e-6);
        assert!((curve.evaluate(1.0) - 1.0).abs() < 1e-6);
        assert!((curve.evaluate(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_bezier_endpoints() {
        // CSS "ease" curve.
        let curve = TimingFunction::CubicBezier(0.25, 0.1, 0.25, 1.0);
        assert!(curve.evaluate(0.0).abs() < 1e-3);
        assert!((curve.evaluate(1.0) - 1.0).abs() < 1e-3);
    }
}
