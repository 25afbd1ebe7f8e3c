// Copyright 2026 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Assembling piecewise cubic approximations of a curve.
//!
//! Each strategy picks parameter intervals differently, fits one cubic per
//! interval with [`fit_cubic`], and emits the cubics into a [`SegmentSink`]
//! in parameter order. All of them return the emitted segments.
//!
//! Failures are not atomic. If an error is raised part way through, the
//! segments emitted before it stay in the sink; only the returned list is
//! lost. Callers that need all-or-nothing behavior should fit into a scratch
//! [`PathBuilder`](crate::PathBuilder) and copy on success.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::builder::emit_bez;
use crate::{
    find_critical_params, fit_cubic, max_error, FitError, FitOptions, ParamCurve, Segment,
    SegmentSink,
};

/// Fit `curve` on `[t0, t1]` to within `tolerance` by recursive bisection.
///
/// The whole interval is fitted first. If the sampled error (see
/// [`max_error`]) is below `tolerance` the cubic is emitted; otherwise the
/// interval is split at its parameter midpoint and each half is handled the
/// same way, left before right.
///
/// `t1` may be less than `t0`, in which case the curve is traced backwards.
///
/// Uses [`FitOptions::default`] to bound the recursion.
///
/// # Errors
///
/// - [`FitError::SubdivisionLimitExceeded`] if the tolerance cannot be met
///   within the default bounds.
/// - Any error from [`fit_cubic`].
///
/// Segments emitted before an error remain in `sink`.
pub fn fit_by_subdivision<C, S>(
    sink: &mut S,
    curve: &C,
    t0: f64,
    t1: f64,
    tolerance: f64,
) -> Result<Vec<Segment>, FitError>
where
    C: ParamCurve + ?Sized,
    S: SegmentSink + ?Sized,
{
    fit_by_subdivision_with(sink, curve, t0, t1, tolerance, &FitOptions::default())
}

/// [`fit_by_subdivision`] with explicit limits.
///
/// # Errors
///
/// - [`FitError::SubdivisionLimitExceeded`] if an interval still misses the
///   tolerance at `options.max_depth`, or is narrower than
///   `options.min_interval`.
/// - Any error from [`fit_cubic`].
///
/// Segments emitted before an error remain in `sink`.
pub fn fit_by_subdivision_with<C, S>(
    sink: &mut S,
    curve: &C,
    t0: f64,
    t1: f64,
    tolerance: f64,
    options: &FitOptions,
) -> Result<Vec<Segment>, FitError>
where
    C: ParamCurve + ?Sized,
    S: SegmentSink + ?Sized,
{
    let mut segments = Vec::new();
    subdivide_rec(sink, curve, t0, t1, tolerance, options, 0, &mut segments)?;
    log::debug!(
        "subdivision fit on [{t0}, {t1}] at tolerance {tolerance}: {} segments",
        segments.len()
    );
    Ok(segments)
}

#[allow(clippy::too_many_arguments, reason = "recursive helper")]
fn subdivide_rec<C, S>(
    sink: &mut S,
    curve: &C,
    t0: f64,
    t1: f64,
    tolerance: f64,
    options: &FitOptions,
    depth: u32,
    segments: &mut Vec<Segment>,
) -> Result<(), FitError>
where
    C: ParamCurve + ?Sized,
    S: SegmentSink + ?Sized,
{
    let c = fit_cubic(curve, t0, t1)?;
    let err = max_error(&c, curve, t0, t1, options.error_samples);
    if err < tolerance {
        log::trace!("accepted [{t0}, {t1}] at depth {depth}, error {err}");
        segments.push(emit_bez(sink, &c));
        return Ok(());
    }
    if depth >= options.max_depth || (t1 - t0).abs() < options.min_interval {
        log::warn!("subdivision gave up on [{t0}, {t1}] at depth {depth}, error {err}");
        return Err(FitError::SubdivisionLimitExceeded {
            depth,
            start: t0,
            end: t1,
        });
    }
    let tm = 0.5 * (t0 + t1);
    subdivide_rec(sink, curve, t0, tm, tolerance, options, depth + 1, segments)?;
    subdivide_rec(sink, curve, tm, t1, tolerance, options, depth + 1, segments)
}

/// Fit `curve` on `[t0, t1]` with `steps` cubics over equal parameter intervals.
///
/// No error check is made; each interval gets exactly one cubic.
///
/// # Errors
///
/// - [`FitError::ZeroSteps`] if `steps` is zero.
/// - Any error from [`fit_cubic`].
///
/// Segments emitted before an error remain in `sink`.
pub fn fit_in_steps<C, S>(
    sink: &mut S,
    curve: &C,
    t0: f64,
    t1: f64,
    steps: usize,
) -> Result<Vec<Segment>, FitError>
where
    C: ParamCurve + ?Sized,
    S: SegmentSink + ?Sized,
{
    if steps == 0 {
        return Err(FitError::ZeroSteps);
    }
    let dt = (t1 - t0) / steps as f64;
    let mut segments = Vec::with_capacity(steps);
    for i in 0..steps {
        let start = t0 + dt * i as f64;
        // Land exactly on `t1` regardless of rounding.
        let end = if i + 1 == steps {
            t1
        } else {
            t0 + dt * (i + 1) as f64
        };
        let c = fit_cubic(curve, start, end)?;
        segments.push(emit_bez(sink, &c));
    }
    log::debug!("stepped fit on [{t0}, {t1}]: {steps} segments");
    Ok(segments)
}

/// Fit `curve` with one cubic between each consecutive pair of `params`.
///
/// `n` breakpoints produce `n - 1` segments.
///
/// # Errors
///
/// - [`FitError::InsufficientBreakpoints`] if fewer than two breakpoints
///   are given.
/// - [`FitError::NonIncreasingBreakpoints`] if the breakpoints are not
///   strictly increasing. Nothing is emitted in either case.
/// - Any error from [`fit_cubic`].
///
/// Segments emitted before a fitting error remain in `sink`.
pub fn fit_at_params<C, S>(
    sink: &mut S,
    curve: &C,
    params: &[f64],
) -> Result<Vec<Segment>, FitError>
where
    C: ParamCurve + ?Sized,
    S: SegmentSink + ?Sized,
{
    if params.len() < 2 {
        return Err(FitError::InsufficientBreakpoints {
            count: params.len(),
        });
    }
    if let Some(index) = params
        .windows(2)
        .position(|w| w[0].partial_cmp(&w[1]) != Some(Ordering::Less))
    {
        return Err(FitError::NonIncreasingBreakpoints { index: index + 1 });
    }
    fit_between(sink, curve, params)
}

/// Fit one cubic per consecutive pair of `params`, in the order given.
fn fit_between<C, S>(sink: &mut S, curve: &C, params: &[f64]) -> Result<Vec<Segment>, FitError>
where
    C: ParamCurve + ?Sized,
    S: SegmentSink + ?Sized,
{
    let mut segments = Vec::with_capacity(params.len().saturating_sub(1));
    for w in params.windows(2) {
        let c = fit_cubic(curve, w[0], w[1])?;
        segments.push(emit_bez(sink, &c));
    }
    log::debug!("breakpoint fit: {} segments", segments.len());
    Ok(segments)
}

/// Fit `curve` on `[t0, t1]` with breakpoints at its critical parameters.
///
/// The breakpoints come from [`find_critical_params`], so every segment runs
/// between coordinate extrema or inflections and is monotonic in both
/// coordinates with consistent turning direction. When fewer than two
/// critical parameters are found, the whole interval is fitted as a single
/// cubic.
///
/// `t0` and `t1` are not added as breakpoints. If they are not themselves
/// critical, the result covers only the span between the first and last
/// critical parameters.
///
/// `t1` may be less than `t0`, in which case the segments run from the
/// critical parameter nearest `t0` towards `t1`.
///
/// # Errors
///
/// - [`FitError::InvalidDomain`] if either bound is not finite.
/// - Any error from [`fit_cubic`].
///
/// Segments emitted before an error remain in `sink`.
pub fn fit_to<C, S>(sink: &mut S, curve: &C, t0: f64, t1: f64) -> Result<Vec<Segment>, FitError>
where
    C: ParamCurve + ?Sized,
    S: SegmentSink + ?Sized,
{
    let (lo, hi) = if t1 < t0 { (t1, t0) } else { (t0, t1) };
    let mut params = find_critical_params(curve, lo, hi)?;
    if params.len() < 2 {
        log::debug!("{} critical params on [{t0}, {t1}], fitting whole", params.len());
        params = alloc::vec![lo, hi];
    }
    if t1 < t0 {
        params.reverse();
    }
    fit_between(sink, curve, &params)
}
