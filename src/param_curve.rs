// Copyright 2026 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trait for curves parametrized by a scalar.

use crate::common::DERIV_STEP;
use crate::{Point, Vec2};

/// A curve parametrized by a scalar.
///
/// Only [`eval`] is required. The tangent and acceleration default to
/// finite-difference estimates built from [`eval`]; implementations that know
/// their derivatives in closed form should override them. Overrides must agree
/// with [`eval`] to within numerical tolerance, because curve fitting treats
/// the tangent as exact.
///
/// A curve is a pure function of `t`: fitting may evaluate it any number of
/// times, in any order, and slightly outside the fitted interval.
///
/// [`eval`]: ParamCurve::eval
pub trait ParamCurve {
    /// Evaluate the curve at parameter `t`.
    fn eval(&self, t: f64) -> Point;

    /// The first derivative with respect to `t`.
    ///
    /// The default is a central difference with step `1e-4`.
    fn tangent(&self, t: f64) -> Vec2 {
        let h = DERIV_STEP;
        (self.eval(t + h) - self.eval(t - h)) / (2.0 * h)
    }

    /// The second derivative with respect to `t`.
    ///
    /// The default is the five-point stencil with step `1e-4`.
    fn acceleration(&self, t: f64) -> Vec2 {
        let h = DERIV_STEP;
        let p = |dt: f64| self.eval(t + dt).to_vec2();
        (-p(2.0 * h) + 16.0 * p(h) - 30.0 * p(0.0) + 16.0 * p(-h) - p(-2.0 * h)) / (12.0 * h * h)
    }

    /// Signed curvature at parameter `t`.
    ///
    /// This is `(tangent × acceleration) / |tangent|³`, positive when the
    /// curve turns counter-clockwise in a y-up frame. It is not finite where
    /// the tangent vanishes.
    fn curvature(&self, t: f64) -> f64 {
        let d = self.tangent(t);
        let d2 = self.acceleration(t);
        d.cross(d2) * d.hypot2().powf(-1.5)
    }
}

impl<C: ParamCurve + ?Sized> ParamCurve for &C {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        (**self).eval(t)
    }

    #[inline]
    fn tangent(&self, t: f64) -> Vec2 {
        (**self).tangent(t)
    }

    #[inline]
    fn acceleration(&self, t: f64) -> Vec2 {
        (**self).acceleration(t)
    }

    #[inline]
    fn curvature(&self, t: f64) -> f64 {
        (**self).curvature(t)
    }
}

/// A curve defined by a position function.
///
/// Tangent and acceleration use the finite-difference defaults of
/// [`ParamCurve`].
///
/// ```
/// use curvefit::{FnCurve, ParamCurve, Point};
///
/// let parabola = FnCurve(|t: f64| Point::new(t, t * t));
/// let d = parabola.tangent(1.0);
/// assert!((d.y - 2.0).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnCurve<F>(pub F);

impl<F: Fn(f64) -> Point> ParamCurve for FnCurve<F> {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        (self.0)(t)
    }
}

#[cfg(test)]
mod tests {
    use crate::{FnCurve, ParamCurve, Point};

    #[test]
    fn numeric_derivatives_of_cubic() {
        // x = t, y = t³
        let c = FnCurve(|t: f64| Point::new(t, t * t * t));
        for i in 0..=10 {
            let t = -1.0 + 0.2 * i as f64;
            let d = c.tangent(t);
            assert!((d.x - 1.0).abs() < 1e-8);
            assert!((d.y - 3.0 * t * t).abs() < 1e-7, "t={t} d={d:?}");
            let a = c.acceleration(t);
            assert!(a.x.abs() < 1e-4);
            assert!((a.y - 6.0 * t).abs() < 1e-4, "t={t} a={a:?}");
        }
    }

    #[test]
    fn curvature_of_circle() {
        let r = 4.0;
        let c = FnCurve(move |t: f64| Point::new(r * t.cos(), r * t.sin()));
        for i in 0..8 {
            let t = 0.7 * i as f64;
            assert!((c.curvature(t) - 1.0 / r).abs() < 1e-5);
        }
        let cw = FnCurve(move |t: f64| Point::new(r * t.cos(), -r * t.sin()));
        assert!((cw.curvature(0.3) + 1.0 / r).abs() < 1e-5);
    }

    #[test]
    fn reference_forwards_overrides() {
        struct Exact;
        impl ParamCurve for Exact {
            fn eval(&self, t: f64) -> Point {
                Point::new(t, 0.0)
            }
            fn tangent(&self, _t: f64) -> crate::Vec2 {
                crate::Vec2::new(42.0, 0.0)
            }
        }
        let by_ref = &Exact;
        assert!((by_ref.tangent(0.0).x - 42.0).abs() < 1e-12);
    }
}
