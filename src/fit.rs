// Copyright 2026 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fitting a single cubic Bézier to a range of a parametric curve.
//!
//! The fit pins both endpoints and both end tangent directions to the source
//! curve. That leaves the two handle lengths free, and they are chosen so the
//! cubic passes through the source curve's parameter midpoint. The result is
//! closed-form: two dot products and a 2×2 solve.

use crate::{CubicBez, FitError, ParamCurve, Point};

/// Number of intervals [`max_error`] samples by default.
pub const DEFAULT_ERROR_SAMPLES: usize = 10;

/// Below this, `1 - cos²` of the angle between the end tangents is treated as
/// zero and the handle lengths are not solved for.
const PARALLEL_EPSILON: f64 = 1e-8;

/// Fit a single cubic to `curve` on `[t0, t1]`.
///
/// The returned cubic starts at `curve.eval(t0)`, ends at `curve.eval(t1)`,
/// leaves along `curve.tangent(t0)` and arrives along `curve.tangent(t1)`.
/// Handle lengths are chosen so that the cubic at `0.5` matches the curve at
/// the parameter midpoint.
///
/// When the end tangents are parallel or antiparallel the handle lengths are
/// underdetermined. In that case, and when either tangent has zero length,
/// the handles fall back to a third of the raw tangents scaled by the
/// interval width, which is the exact Hermite handle for the range.
///
/// # Errors
///
/// - [`FitError::CurveUndefined`] if the curve is not finite at `t0`, `t1`
///   or their midpoint.
/// - [`FitError::TangentUndefined`] if the tangent is not finite at `t0` or `t1`.
///
/// ```
/// use core::f64::consts::FRAC_PI_2;
/// use curvefit::{fit_cubic, FnCurve, Point};
///
/// let circle = FnCurve(|t: f64| Point::new(t.cos(), t.sin()));
/// let c = fit_cubic(&circle, 0.0, FRAC_PI_2).unwrap();
/// // The classic quarter-circle handle length.
/// assert!((c.p1.y - 0.5523).abs() < 1e-3);
/// ```
pub fn fit_cubic<C: ParamCurve + ?Sized>(
    curve: &C,
    t0: f64,
    t1: f64,
) -> Result<CubicBez, FitError> {
    let tm = 0.5 * (t0 + t1);
    let p0 = finite_point(curve, t0)?;
    let p3 = finite_point(curve, t1)?;
    let mid = finite_point(curve, tm)?;
    let v0 = curve.tangent(t0);
    if !v0.is_finite() {
        return Err(FitError::TangentUndefined { t: t0 });
    }
    let v1 = curve.tangent(t1);
    if !v1.is_finite() {
        return Err(FitError::TangentUndefined { t: t1 });
    }

    let u0 = v0.normalize();
    let u1 = v1.normalize();
    let c = u0.dot(u1);
    let det = 1.0 - c * c;
    // NaN comes from a zero-length tangent.
    if det.is_nan() || det < PARALLEL_EPSILON {
        log::trace!("degenerate tangents on [{t0}, {t1}], using raw handles");
        let scale = (t1 - t0) * (1.0 / 3.0);
        return Ok(CubicBez::new(p0, p0 + v0 * scale, p3 - v1 * scale, p3));
    }

    // Matching the cubic at 0.5 to `mid` gives s0·u0 - s1·u1 = r.
    let r = (4.0 / 3.0) * (2.0 * mid.to_vec2() - p0.to_vec2() - p3.to_vec2());
    let r0 = r.dot(u0);
    let r1 = r.dot(u1);
    let s0 = (r0 - c * r1) / det;
    let s1 = (c * r0 - r1) / det;
    Ok(CubicBez::new(p0, p0 + u0 * s0, p3 - u1 * s1, p3))
}

fn finite_point<C: ParamCurve + ?Sized>(curve: &C, t: f64) -> Result<Point, FitError> {
    let p = curve.eval(t);
    if p.is_finite() {
        Ok(p)
    } else {
        Err(FitError::CurveUndefined { t })
    }
}

/// Maximum distance between a fitted cubic and the curve it was fitted to.
///
/// The range `[t0, t1]` of `curve` is sampled at `samples + 1` evenly spaced
/// parameters, and each is compared against `bez` at the corresponding
/// parameter in `[0, 1]`. The result is the largest Euclidean distance found.
/// A `samples` of zero is treated as one.
///
/// This compares by parameter, not by nearest point, so it overestimates the
/// geometric distance when the cubic's speed differs from the curve's.
pub fn max_error<C: ParamCurve + ?Sized>(
    bez: &CubicBez,
    curve: &C,
    t0: f64,
    t1: f64,
    samples: usize,
) -> f64 {
    let n = samples.max(1);
    let step = (n as f64).recip();
    (0..=n)
        .map(|i| {
            let u = i as f64 * step;
            let t = t0 + (t1 - t0) * u;
            bez.eval(u).distance(curve.eval(t))
        })
        .fold(0.0, f64::max)
}
