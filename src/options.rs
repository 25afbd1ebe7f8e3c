// Copyright 2026 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable limits for error-bounded fitting.

use crate::DEFAULT_ERROR_SAMPLES;

/// Options for [`fit_by_subdivision_with`].
///
/// The defaults are loose enough that a well-conditioned curve never runs
/// into them; they exist so a curve that cannot meet its tolerance fails
/// with [`FitError::SubdivisionLimitExceeded`] instead of recursing without
/// bound.
///
/// [`fit_by_subdivision_with`]: crate::fit_by_subdivision_with
/// [`FitError::SubdivisionLimitExceeded`]: crate::FitError::SubdivisionLimitExceeded
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FitOptions {
    /// Deepest bisection allowed below the initial interval.
    pub max_depth: u32,
    /// Narrowest parameter interval that may still be bisected.
    pub min_interval: f64,
    /// Sample count passed to [`max_error`](crate::max_error).
    pub error_samples: usize,
}

impl FitOptions {
    /// The default options.
    pub const DEFAULT: FitOptions = FitOptions {
        max_depth: 32,
        min_interval: 1e-9,
        error_samples: DEFAULT_ERROR_SAMPLES,
    };

    /// Set the maximum bisection depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the narrowest interval that may still be bisected.
    #[must_use]
    pub fn with_min_interval(mut self, min_interval: f64) -> Self {
        self.min_interval = min_interval;
        self
    }

    /// Set the number of error samples per fitted segment.
    #[must_use]
    pub fn with_error_samples(mut self, error_samples: usize) -> Self {
        self.error_samples = error_samples;
        self
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        FitOptions::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::FitOptions;

    #[test]
    fn builders() {
        let opts = FitOptions::default()
            .with_max_depth(4)
            .with_min_interval(0.5)
            .with_error_samples(3);
        assert_eq!(opts.max_depth, 4);
        assert!((opts.min_interval - 0.5).abs() < f64::EPSILON);
        assert_eq!(opts.error_samples, 3);
        assert_eq!(FitOptions::default(), FitOptions::DEFAULT);
    }
}
