// Copyright 2026 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piecewise cubic Bézier approximation of parametric curves.
//!
//! Any curve that can report a position for a parameter value, described by
//! the [`ParamCurve`] trait, can be turned into a chain of cubic Béziers.
//! The building block is [`fit_cubic`], which fits one cubic to a parameter
//! range in closed form by matching endpoints, end tangent directions and the
//! parameter midpoint. On top of it sit several ways of choosing the ranges:
//!
//! - [`fit_by_subdivision`] bisects until a sampled error bound is met.
//! - [`fit_in_steps`] uses a fixed number of equal ranges.
//! - [`fit_at_params`] uses caller-supplied breakpoints.
//! - [`fit_to`] breaks at coordinate extrema and inflections, found with the
//!   heuristic root finder [`find_roots`].
//!
//! Cubics are emitted into a [`SegmentSink`], a builder with a single drawing
//! cursor; [`PathBuilder`] is the in-crate implementation. Interpolating
//! splines through explicit points are provided by [`cardinal_spline`] and
//! [`catmull_rom_spline`], and circular arcs by [`fit_arc`].
//!
//! # Examples
//!
//! Fitting a sine wave to a tolerance:
//!
//! ```
//! use curvefit::{fit_by_subdivision, FnCurve, PathBuilder, Point, SegmentSink};
//!
//! let wave = FnCurve(|t: f64| Point::new(t, t.sin()));
//! let mut path = PathBuilder::new();
//! let segments = fit_by_subdivision(&mut path, &wave, 0.0, 6.0, 0.01).unwrap();
//! assert!(segments.len() > 1);
//! assert!(path.current_position().distance(Point::new(6.0, 6f64.sin())) < 1e-9);
//! ```
//!
//! Splitting a circle at its extrema:
//!
//! ```
//! use core::f64::consts::PI;
//! use curvefit::{find_critical_params, fit_to, FnCurve, PathBuilder, Point};
//!
//! let circle = FnCurve(|t: f64| Point::new(5.0 * t.cos(), 5.0 * t.sin()));
//! assert_eq!(find_critical_params(&circle, 0.0, 2.0 * PI).unwrap().len(), 5);
//! let segments = fit_to(&mut PathBuilder::new(), &circle, 0.0, 2.0 * PI).unwrap();
//! assert_eq!(segments.len(), 4);
//! ```
//!
//! # Logging
//!
//! Diagnostics go through the [`log`] facade: per-segment detail at `trace`,
//! per-call summaries at `debug`, and a `warn` when subdivision gives up. No
//! logger is installed by this crate.
//!
//! # Features
//!
//! - `mint`: Enable `From`/`Into` conversion of [`Point`] and [`Vec2`] with
//!   [mint][] types.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the
//!   geometry types, [`Segment`] and [`FitOptions`].
//!
//! [mint]: https://docs.rs/mint

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision,
    clippy::bool_to_int_with_if
)]
#![allow(
    single_use_lifetimes,
    trivial_numeric_casts,
    clippy::use_self,
    clippy::return_self_not_must_use,
    clippy::cast_possible_truncation,
    clippy::missing_assert_message,
    clippy::exhaustive_enums,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

extern crate alloc;

mod arc;
mod builder;
mod cardinal;
pub mod common;
mod critical;
mod cubicbez;
mod error;
mod fit;
mod options;
mod param_curve;
mod point;
mod roots;
mod spline;
mod vec2;

pub use crate::arc::*;
pub use crate::builder::*;
pub use crate::cardinal::*;
pub use crate::critical::*;
pub use crate::cubicbez::*;
pub use crate::error::*;
pub use crate::fit::*;
pub use crate::options::*;
pub use crate::param_curve::*;
pub use crate::point::*;
pub use crate::roots::*;
pub use crate::spline::*;
pub use crate::vec2::*;
