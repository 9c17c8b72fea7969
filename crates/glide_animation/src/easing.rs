//! Easing functions for transitions

use thiserror::Error;

/// Error constructing a custom easing curve.
#[derive(Debug, Error, PartialEq)]
pub enum EasingError {
    /// Control point x-coordinates must stay within `[0, 1]`; curves with
    /// x outside that range are not functions of time.
    #[error("cubic-bezier control point x={0} is outside [0, 1]")]
    ControlPointOutOfRange(f32),
}

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Validated constructor for a custom cubic-bezier curve.
    ///
    /// The y-coordinates may exceed `[0, 1]` (overshoot curves are legal);
    /// the x-coordinates may not.
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Self, EasingError> {
        for x in [x1, x2] {
            if !(0.0..=1.0).contains(&x) {
                return Err(EasingError::ControlPointOutOfRange(x));
            }
        }
        Ok(Self::CubicBezier(x1, y1, x2, y2))
    }

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => bezier_ease(t, *x1, *y1, *x2, *y2),
        }
    }
}

/// Cubic bezier easing calculation (matches CSS spec / browser implementations).
///
/// Uses Newton-Raphson with binary-search fallback for robustness.
/// Computes in f64 internally to avoid f32 precision jitter at high frame rates.
fn bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Endpoints are always exact
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x = t as f64;
    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);

    // Solve bezier_axis(p, x1, x2) == x for the curve parameter p.
    // Newton-Raphson first; it converges in a handful of iterations for
    // well-behaved curves.
    let mut p = x;
    for _ in 0..8 {
        let err = bezier_axis(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return bezier_axis(p, y1, y2) as f32;
        }
        let slope = bezier_axis_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break; // slope too flat, switch to binary search
        }
        p -= err / slope;
    }

    // Binary search fallback (always converges)
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    p = x;
    for _ in 0..20 {
        let val = bezier_axis(p, x1, x2);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_axis(p, y1, y2) as f32
}

/// Evaluate one axis of the cubic bezier at parameter t, in Horner form.
#[inline]
fn bezier_axis(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

/// Derivative of one bezier axis with respect to t.
#[inline]
fn bezier_axis_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_is_identity() {
        for t in [0.0, 0.25, 0.5, 1.0] {
            assert_eq!(Easing::Linear.apply(t), t);
        }
    }

    #[test]
    fn test_endpoints_are_exact() {
        let curves = [
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::CubicBezier(0.25, 0.8, 0.5, 1.0),
        ];
        for curve in curves {
            assert_eq!(curve.apply(0.0), 0.0);
            assert_eq!(curve.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_ease_out_decelerates() {
        // An ease-out curve covers more than half the distance in the
        // first half of the time.
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
    }

    #[test]
    fn test_bezier_matches_css_ease_out_shape() {
        // cubic-bezier(.25,.8,.5,1) is a decelerating curve: monotone
        // increasing and ahead of linear for all interior t.
        let curve = Easing::CubicBezier(0.25, 0.8, 0.5, 1.0);
        let mut prev = 0.0;
        for i in 1..20 {
            let t = i as f32 / 20.0;
            let v = curve.apply(t);
            assert!(v > prev, "not monotone at t={t}: {v} <= {prev}");
            assert!(v > t, "behind linear at t={t}");
            prev = v;
        }
    }

    #[test]
    fn test_cubic_bezier_rejects_bad_x() {
        assert_eq!(
            Easing::cubic_bezier(1.5, 0.0, 0.5, 1.0),
            Err(EasingError::ControlPointOutOfRange(1.5))
        );
        assert_eq!(
            Easing::cubic_bezier(0.5, 0.0, -0.1, 1.0),
            Err(EasingError::ControlPointOutOfRange(-0.1))
        );
        assert!(Easing::cubic_bezier(0.25, 0.8, 0.5, 1.0).is_ok());
    }

    #[test]
    fn test_overshoot_y_is_allowed() {
        let curve = Easing::cubic_bezier(0.34, 1.56, 0.64, 1.0).unwrap();
        // Back-out style curve overshoots past 1.0 before settling.
        let mut max = 0.0f32;
        for i in 0..=40 {
            max = max.max(curve.apply(i as f32 / 40.0));
        }
        assert!(max > 1.0);
    }
}
