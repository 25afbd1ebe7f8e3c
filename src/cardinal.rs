// Copyright 2026 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interpolating splines through explicit points.

use alloc::vec::Vec;

use crate::{CubicBez, Point, Segment, SegmentSink, Vec2};

/// Tension that makes [`cardinal_spline`] a Catmull-Rom spline.
pub const CATMULL_ROM_TENSION: f64 = 0.5;

/// The cubic Bézier with the given Hermite end conditions.
///
/// `v0` and `v1` are the derivatives at `p0` and `p1` with respect to a
/// parameter running over `[0, 1]`.
///
/// ```
/// use curvefit::{hermite_to_cubic, Point, Vec2};
///
/// let (p0, p1) = (Point::ORIGIN, Point::new(3.0, 3.0));
/// let c = hermite_to_cubic(p0, Vec2::new(3.0, 0.0), p1, Vec2::new(0.0, 3.0));
/// assert_eq!(c.p1, Point::new(1.0, 0.0));
/// assert_eq!(c.p2, Point::new(3.0, 2.0));
/// ```
pub fn hermite_to_cubic(p0: Point, v0: Vec2, p1: Point, v1: Vec2) -> CubicBez {
    CubicBez::new(p0, p0 + v0 * (1.0 / 3.0), p1 - v1 * (1.0 / 3.0), p1)
}

/// Stitch a cardinal spline from the sink's cursor through `points`.
///
/// The cursor is the first knot and each of `points` is a further knot, so
/// `n` points produce `n` segments. Interior knots get the velocity
/// `tension * (next - previous)`. The first and last knots have no outer
/// neighbor and use `2 * tension` times their adjacent chord instead.
///
/// Consecutive segments share their knot velocity, so the result is C1
/// continuous. An empty `points` emits nothing.
pub fn cardinal_spline<S>(sink: &mut S, tension: f64, points: &[Point]) -> Vec<Segment>
where
    S: SegmentSink + ?Sized,
{
    let Some(&last) = points.last() else {
        return Vec::new();
    };
    let start = sink.current_position();
    let n = points.len();
    // Knot `i` is `start` for i == 0, and `points[i - 1]` otherwise.
    let knot = |i: usize| if i == 0 { start } else { points[i - 1] };
    let velocity = |i: usize| -> Vec2 {
        if i == 0 {
            2.0 * tension * (knot(1) - start)
        } else if i == n {
            2.0 * tension * (last - knot(n - 1))
        } else {
            tension * (knot(i + 1) - knot(i - 1))
        }
    };

    let mut segments = Vec::with_capacity(n);
    let mut v0 = velocity(0);
    for i in 1..=n {
        let v1 = velocity(i);
        let c = hermite_to_cubic(knot(i - 1), v0, knot(i), v1);
        segments.push(sink.emit_cubic(c.p1, c.p2, c.p3));
        v0 = v1;
    }
    log::debug!("cardinal spline with tension {tension}: {n} segments");
    segments
}

/// A [`cardinal_spline`] with tension [`CATMULL_ROM_TENSION`].
pub fn catmull_rom_spline<S>(sink: &mut S, points: &[Point]) -> Vec<Segment>
where
    S: SegmentSink + ?Sized,
{
    cardinal_spline(sink, CATMULL_ROM_TENSION, points)
}
