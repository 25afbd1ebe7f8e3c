// Copyright 2026 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive scanning root finder for scalar functions of one parameter.

use smallvec::SmallVec;

use crate::common::DERIV_STEP;
use crate::FitError;

/// Roots reported by [`find_roots`], in ascending order.
pub type Roots = SmallVec<[f64; 4]>;

/// A value whose magnitude is below this is treated as zero.
pub const ROOT_EPSILON: f64 = 1e-8;

const MIN_STEP: f64 = 1e-4;
const MAX_STEP: f64 = 0.1;
/// A slope reversal only triggers refinement when the function is this close to zero.
const FLAT_CROSSING_GATE: f64 = 0.1;
const MAX_BISECTIONS: usize = 50;

/// Find approximate zeros of `f` on `[t_start, t_end]`.
///
/// The interval is scanned with a step adapted to the local slope: roughly
/// `0.1 / |f'|`, clamped to `[1e-4, 0.1]`. A step that lands within
/// [`ROOT_EPSILON`] of zero is taken as a root directly. A step across which
/// `f` changes sign is refined by bisection. So is a step across which the
/// slope reverses while `f` is within `0.1` of zero at either end, which
/// catches near-tangent crossings that a sign test alone would skip.
///
/// This is a heuristic, not a certified root isolation: functions that
/// oscillate faster than the step size, or touch zero away from the `0.1`
/// gate, can have roots missed. A slope reversal near zero without an actual
/// crossing is reported at the end of the step.
///
/// `t_start` itself is reported when `f(t_start)` is already zero. The
/// function is sampled up to `1e-4` outside the interval for slope estimates.
///
/// At parameter magnitudes where a step no longer changes `t` (around `1e16`
/// and beyond) the scan stops early and the rest of the interval is not
/// searched.
///
/// # Errors
///
/// Returns [`FitError::InvalidDomain`] if either bound is not finite.
///
/// ```
/// use curvefit::find_roots;
///
/// let roots = find_roots(|t| t * t - 0.25, 0.0, 1.0).unwrap();
/// assert_eq!(roots.len(), 1);
/// assert!((roots[0] - 0.5).abs() < 1e-6);
/// ```
pub fn find_roots(f: impl Fn(f64) -> f64, t_start: f64, t_end: f64) -> Result<Roots, FitError> {
    if !(t_start.is_finite() && t_end.is_finite()) {
        return Err(FitError::InvalidDomain {
            start: t_start,
            end: t_end,
        });
    }
    let slope_at = |t: f64| (f(t + DERIV_STEP) - f(t - DERIV_STEP)) / (2.0 * DERIV_STEP);

    let mut roots = Roots::new();
    let mut t = t_start;
    let mut v = f(t);
    let mut slope = slope_at(t);
    if v.abs() < ROOT_EPSILON {
        roots.push(t);
    }
    while t_end - t > ROOT_EPSILON {
        let mut dt = (MAX_STEP / slope.abs()).clamp(MIN_STEP, MAX_STEP);
        if dt.is_nan() {
            dt = MAX_STEP;
        }
        let t_next = (t + dt).min(t_end);
        if t_next <= t {
            log::warn!("root scan stalled at t = {t}, step {dt} is below float resolution");
            break;
        }
        let v_next = f(t_next);
        let slope_next = slope_at(t_next);

        if v_next.abs() < ROOT_EPSILON {
            if (v_next - v).abs() > ROOT_EPSILON {
                roots.push(t_next);
            }
        } else if v.abs() >= ROOT_EPSILON {
            // When `v` is zero the current sample was already reported.
            let crosses = v * v_next < 0.0;
            let flat_turn = slope * slope_next < 0.0
                && (v.abs() <= FLAT_CROSSING_GATE || v_next.abs() <= FLAT_CROSSING_GATE);
            if crosses || flat_turn {
                roots.push(bisect(&f, t, v, t_next));
            }
        }

        t = t_next;
        v = v_next;
        slope = slope_next;
    }
    Ok(roots)
}

/// Refine a root between `lo` and `hi` by bisection.
///
/// `f_lo` is `f(lo)`. Gives up after a fixed number of halvings and returns
/// the last midpoint.
fn bisect(f: &impl Fn(f64) -> f64, mut lo: f64, mut f_lo: f64, mut hi: f64) -> f64 {
    let mut mid = 0.5 * (lo + hi);
    for _ in 0..MAX_BISECTIONS {
        mid = 0.5 * (lo + hi);
        let f_mid = f(mid);
        if f_mid.abs() < ROOT_EPSILON {
            return mid;
        }
        if (f_lo < 0.0) == (f_mid < 0.0) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    mid
}

#[cfg(test)]
mod tests {
    use crate::{find_roots, FitError};

    #[test]
    fn linear_root() {
        let roots = find_roots(|t| t - 0.5, 0.0, 1.0).unwrap();
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 0.5).abs() < 0.01);
    }

    #[test]
    fn root_at_start_is_included() {
        let roots = find_roots(|t| t - 0.5, 0.5, 1.0).unwrap();
        assert_eq!(roots.as_slice(), &[0.5]);
    }

    #[test]
    fn root_at_end_is_included() {
        let roots = find_roots(|t| t - 1.0, 0.0, 1.0).unwrap();
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 1.0).abs() < 1e-8);
    }

    #[test]
    fn sine_roots() {
        let roots = find_roots(f64::sin, 0.5, 10.0).unwrap();
        let expected = [
            core::f64::consts::PI,
            2.0 * core::f64::consts::PI,
            3.0 * core::f64::consts::PI,
        ];
        assert_eq!(roots.len(), expected.len(), "{roots:?}");
        for (r, e) in roots.iter().zip(expected) {
            assert!((r - e).abs() < 1e-7, "got {r} expected {e}");
        }
    }

    #[test]
    fn steep_function() {
        // Slope 1000 forces the minimum step.
        let roots = find_roots(|t| 1000.0 * (t - 0.3217), 0.0, 1.0).unwrap();
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 0.3217).abs() < 1e-9);
    }

    #[test]
    fn no_roots() {
        let roots = find_roots(|t| t * t + 1.0, -2.0, 2.0).unwrap();
        assert!(roots.is_empty());
    }

    #[test]
    fn roots_are_ascending() {
        let roots = find_roots(|t| (3.0 * t).cos(), -4.0, 4.0).unwrap();
        assert!(roots.len() >= 7);
        assert!(roots.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rejects_infinite_bounds() {
        assert_eq!(
            find_roots(|t| t, 0.0, f64::INFINITY),
            Err(FitError::InvalidDomain {
                start: 0.0,
                end: f64::INFINITY
            })
        );
        assert!(find_roots(|t| t, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn flat_touch_is_reported_at_step_end() {
        // Touches zero at 0.537 without crossing; the scan steps over it.
        let roots = find_roots(|t| (t - 0.537) * (t - 0.537), 0.0, 1.0).unwrap();
        assert_eq!(roots.len(), 1, "{roots:?}");
        // Bisection has no sign change to follow and drifts to the step end.
        assert!(roots[0] > 0.537 && roots[0] < 0.637, "{roots:?}");
    }

    #[test]
    fn bisection_budget_runs_out() {
        // A jump is never within the zero tolerance, so all halvings are used.
        let step = |t: f64| if t < 0.3 { -1.0 } else { 1.0 };
        let roots = find_roots(step, 0.0, 1.0).unwrap();
        assert_eq!(roots.len(), 1, "{roots:?}");
        assert!((roots[0] - 0.3).abs() < 1e-12, "{roots:?}");
        assert!(step(roots[0]) < 0.0);
    }

    #[test]
    fn huge_bounds_terminate() {
        // Steps of 0.1 are below the float spacing at 1e16.
        let roots = find_roots(|t| t - 1e16 - 4.0, 1e16, 1e16 + 10.0).unwrap();
        assert!(roots.is_empty());
    }

    #[test]
    fn empty_interval() {
        let roots = find_roots(|t| t - 2.0, 2.0, 2.0).unwrap();
        assert_eq!(roots.as_slice(), &[2.0]);
        let roots = find_roots(|t| t, 2.0, 2.0).unwrap();
        assert!(roots.is_empty());
    }
}
