// Copyright 2026 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by root finding and curve fitting.

use thiserror::Error;

/// An error raised while locating roots or fitting a curve.
///
/// All of these are immediate failures of deterministic numerical code;
/// retrying with the same input produces the same error.
///
/// Fitting functions that emit into a [`SegmentSink`] do not roll the sink
/// back on failure. Segments emitted before the error remain appended.
///
/// [`SegmentSink`]: crate::SegmentSink
#[derive(Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum FitError {
    /// A search interval bound is infinite or NaN.
    #[error("search interval [{start}, {end}] is not finite")]
    InvalidDomain {
        /// Lower bound of the interval.
        start: f64,
        /// Upper bound of the interval.
        end: f64,
    },

    /// The curve position is not finite at a parameter needed by the fit.
    #[error("curve position is undefined at t = {t}")]
    CurveUndefined {
        /// The offending parameter value.
        t: f64,
    },

    /// The curve tangent is not finite at a fitted endpoint.
    #[error("curve tangent is undefined at t = {t}")]
    TangentUndefined {
        /// The offending parameter value.
        t: f64,
    },

    /// Breakpoint-driven fitting needs at least two breakpoints.
    #[error("at least 2 breakpoints are required, got {count}")]
    InsufficientBreakpoints {
        /// Number of breakpoints supplied.
        count: usize,
    },

    /// Breakpoints must be strictly increasing.
    #[error("breakpoint {index} does not increase on its predecessor")]
    NonIncreasingBreakpoints {
        /// Index of the first breakpoint not greater than the one before it.
        index: usize,
    },

    /// Fixed-step fitting was asked for zero steps.
    #[error("step count must be at least 1")]
    ZeroSteps,

    /// Recursive subdivision hit its depth or interval-width bound before
    /// reaching the requested tolerance.
    #[error("subdivision limit exceeded at depth {depth} on [{start}, {end}]")]
    SubdivisionLimitExceeded {
        /// Recursion depth at which the bound was hit.
        depth: u32,
        /// Start of the interval that could not be fitted.
        start: f64,
        /// End of the interval that could not be fitted.
        end: f64,
    },
}
