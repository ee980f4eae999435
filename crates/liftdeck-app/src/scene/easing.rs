//! Cubic Bézier timing curves.

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const EPSILON: f32 = 1e-5;

impl CubicBezier {
    /// `ease`, used for text fades.
    pub const EASE: Self = Self::new(0.25, 0.1, 0.25, 1.0);

    /// Standard curve, used for the door panels.
    pub const STANDARD: Self = Self::new(0.4, 0.0, 0.2, 1.0);

    /// Identity.
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Curve through control points `(x1, y1)` and `(x2, y2)`. `x1` and
    /// `x2` must lie in `[0, 1]` for the curve to be a function of time.
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for linear progress `x`, clamped to `[0, 1]`.
    pub fn apply(&self, x: f32) -> f32 {
        if x.is_nan() || x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }

    /// Curve parameter `t` whose x coordinate is `x`.
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = Self::sample(self.x1, self.x2, t) - x;
            if error.abs() < EPSILON {
                return t;
            }
            let slope = Self::slope(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    fn sample(a1: f32, a2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn slope(a1: f32, a2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn endpoints_are_fixed() {
        for curve in [CubicBezier::EASE, CubicBezier::STANDARD, CubicBezier::LINEAR] {
            assert_eq!(curve.apply(0.0), 0.0);
            assert_eq!(curve.apply(1.0), 1.0);
            assert_eq!(curve.apply(-3.0), 0.0);
            assert_eq!(curve.apply(3.0), 1.0);
            assert_eq!(curve.apply(f32::NAN), 0.0);
        }
    }

    #[test]
    fn linear_is_identity() {
        for i in 0..=10 {
            let x = i as f32 / 10.0;
            assert!(close(CubicBezier::LINEAR.apply(x), x), "x={x}");
        }
    }

    #[test]
    fn symmetric_curve_crosses_midpoint() {
        let ease_in_out = CubicBezier::new(0.42, 0.0, 0.58, 1.0);
        assert!(close(ease_in_out.apply(0.5), 0.5));
    }

    #[test]
    fn curves_are_monotonic() {
        for curve in [CubicBezier::EASE, CubicBezier::STANDARD] {
            let mut previous = 0.0;
            for i in 1..=100 {
                let y = curve.apply(i as f32 / 100.0);
                assert!(y + 1e-4 >= previous, "{curve:?} decreased at {i}");
                previous = y;
            }
        }
    }

    #[test]
    fn standard_decelerates() {
        // Most of the travel happens in the first half.
        assert!(CubicBezier::STANDARD.apply(0.5) > 0.7);
    }
}
