// Copyright 2026 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detection of parameters where a curve's motion changes character.

use alloc::vec::Vec;

use crate::common::round_to_decimals;
use crate::{find_roots, FitError, ParamCurve};

/// Critical parameters are snapped to this many decimal places.
pub const CRITICAL_DECIMALS: i32 = 8;

/// Find the critical parameters of `curve` on `[t0, t1]`.
///
/// A critical parameter is one where the x velocity, the y velocity or the
/// signed curvature vanishes: coordinate extrema and inflection points. Each
/// is located with [`find_roots`], so the same heuristic caveats apply.
///
/// The result is rounded to 8 decimal places, sorted ascending and free of
/// duplicates, and never leaves `[t0, t1]`. Interval endpoints appear only
/// when they are themselves critical.
///
/// # Errors
///
/// Returns [`FitError::InvalidDomain`] if either bound is not finite.
pub fn find_critical_params<C: ParamCurve + ?Sized>(
    curve: &C,
    t0: f64,
    t1: f64,
) -> Result<Vec<f64>, FitError> {
    let dx = find_roots(|t| curve.tangent(t).x, t0, t1)?;
    let dy = find_roots(|t| curve.tangent(t).y, t0, t1)?;
    let inflections = find_roots(|t| curve.curvature(t), t0, t1)?;

    // Rounding must not push a root found at an endpoint outside the interval.
    let (lo, hi) = (t0.min(t1), t0.max(t1));
    let mut params: Vec<f64> = dx
        .iter()
        .chain(&dy)
        .chain(&inflections)
        .map(|&t| round_to_decimals(t, CRITICAL_DECIMALS).clamp(lo, hi))
        .collect();
    params.sort_by(f64::total_cmp);
    // Neighbors on the rounding grid are one unit apart; merge those too.
    let grid = 10f64.powi(-CRITICAL_DECIMALS);
    params.dedup_by(|later, kept| *later - *kept < 1.5 * grid);
    log::debug!(
        "critical params on [{t0}, {t1}]: {} x, {} y, {} inflection -> {}",
        dx.len(),
        dy.len(),
        inflections.len(),
        params.len()
    );
    Ok(params)
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{find_critical_params, CubicBez, FitError, FnCurve, Point};

    fn circle(r: f64) -> FnCurve<impl Fn(f64) -> Point> {
        FnCurve(move |t: f64| Point::new(r * t.cos(), r * t.sin()))
    }

    #[test]
    fn circle_extrema() {
        // Velocity is (-r sin t, r cos t); curvature never vanishes.
        let params = find_critical_params(&circle(5.0), 0.0, 2.0 * PI).unwrap();
        let expected = [0.0, FRAC_PI_2, PI, 1.5 * PI, 2.0 * PI];
        assert_eq!(params.len(), expected.len(), "{params:?}");
        for (p, e) in params.iter().zip(expected) {
            assert!((p - e).abs() < 1e-6, "got {p} expected {e}");
        }
    }

    #[test]
    fn endpoints_are_not_injected() {
        let params = find_critical_params(&circle(5.0), 0.2, 3.0).unwrap();
        assert_eq!(params.len(), 1);
        assert!((params[0] - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn cubic_inflection() {
        // x = t, y = t³ - t: extrema of y at ±1/√3, inflection at 0.
        let c = FnCurve(|t: f64| Point::new(t, t * t * t - t));
        let params = find_critical_params(&c, -1.0, 1.0).unwrap();
        let s = 3f64.sqrt().recip();
        let expected = [-s, 0.0, s];
        assert_eq!(params.len(), expected.len(), "{params:?}");
        for (p, e) in params.iter().zip(expected) {
            assert!((p - e).abs() < 1e-6, "got {p} expected {e}");
        }
    }

    #[test]
    fn matches_closed_form_bezier_extrema() {
        let c = CubicBez::new((0.4, 0.5), (0.0, 1.0), (1.0, 0.0), (0.5, 0.4));
        let params = find_critical_params(&c, 0.0, 1.0).unwrap();
        for e in c.extrema() {
            assert!(
                params.iter().any(|p| (p - e).abs() < 1e-6),
                "extremum {e} missing from {params:?}"
            );
        }
    }

    #[test]
    fn sorted_and_separated() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let a: f64 = rng.random_range(0.5..3.0);
            let b: f64 = rng.random_range(0.5..3.0);
            let c = FnCurve(move |t: f64| Point::new((a * t).sin() + t, (b * t).cos()));
            let params = find_critical_params(&c, 0.0, 6.0).unwrap();
            for w in params.windows(2) {
                assert!(w[1] - w[0] > 1e-8, "{params:?}");
            }
            assert!(params.iter().all(|t| (0.0..=6.0).contains(t)));
        }
    }

    #[test]
    fn rounding_stays_inside_interval() {
        // The extremum of y sits exactly on `t1`, which has 9 decimals.
        let t1 = 0.123456789;
        let c = FnCurve(move |t: f64| Point::new(t, (t - t1) * (t - t1)));
        let params = find_critical_params(&c, 0.0, t1).unwrap();
        assert_eq!(params.len(), 1, "{params:?}");
        assert!(params[0] <= t1, "{params:?}");
        assert!((params[0] - t1).abs() < 1e-8);
    }

    #[test]
    fn rejects_infinite_domain() {
        assert!(matches!(
            find_critical_params(&circle(1.0), f64::NEG_INFINITY, 0.0),
            Err(FitError::InvalidDomain { .. })
        ));
    }
}
