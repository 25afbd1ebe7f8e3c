// Copyright 2026 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Destinations for emitted cubic segments.

use alloc::vec::Vec;

use crate::{CubicBez, Point, Vec2};

/// Distance below which the cursor is considered to already sit on a point.
pub const CURSOR_EPSILON: f64 = 1e-9;

/// A cubic segment emitted into a [`SegmentSink`].
///
/// The handle keeps the full cubic, so the fitted control points can be
/// inspected, and exposes the end state needed to chain further segments
/// from the same cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// The emitted cubic, starting at the cursor position it was emitted from.
    pub curve: CubicBez,
}

impl Segment {
    /// The point the segment starts at.
    #[inline]
    pub fn start(&self) -> Point {
        self.curve.p0
    }

    /// The point the segment ends at; the cursor position after emission.
    #[inline]
    pub fn end(&self) -> Point {
        self.curve.p3
    }

    /// The derivative of the cubic at its start.
    #[inline]
    pub fn start_velocity(&self) -> Vec2 {
        3.0 * (self.curve.p1 - self.curve.p0)
    }

    /// The derivative of the cubic at its end.
    #[inline]
    pub fn end_velocity(&self) -> Vec2 {
        3.0 * (self.curve.p3 - self.curve.p2)
    }
}

/// An append-only destination for cubic segments with a single cursor.
///
/// Fitting functions emit into a sink in order and never remove anything.
/// A sink is not meant to be shared between concurrent fitting calls; the
/// `&mut` receiver enforces that.
pub trait SegmentSink {
    /// The current cursor position.
    fn current_position(&self) -> Point;

    /// Move the cursor without emitting a segment.
    fn move_to(&mut self, p: Point);

    /// Append a cubic from the cursor through control points `p1`, `p2` to
    /// `p3`, and move the cursor to `p3`.
    fn emit_cubic(&mut self, p1: Point, p2: Point, p3: Point) -> Segment;
}

impl<S: SegmentSink + ?Sized> SegmentSink for &mut S {
    #[inline]
    fn current_position(&self) -> Point {
        (**self).current_position()
    }

    #[inline]
    fn move_to(&mut self, p: Point) {
        (**self).move_to(p);
    }

    #[inline]
    fn emit_cubic(&mut self, p1: Point, p2: Point, p3: Point) -> Segment {
        (**self).emit_cubic(p1, p2, p3)
    }
}

/// Emit `c` so that the resulting segment reproduces it exactly.
///
/// Moves the cursor to `c.p0` first unless it is already there.
pub(crate) fn emit_bez<S: SegmentSink + ?Sized>(sink: &mut S, c: &CubicBez) -> Segment {
    if sink.current_position().distance(c.p0) > CURSOR_EPSILON {
        sink.move_to(c.p0);
    }
    sink.emit_cubic(c.p1, c.p2, c.p3)
}

/// An element recorded by a [`PathBuilder`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Move directly to the point without drawing anything.
    MoveTo(Point),
    /// Draw a cubic bezier using the current position, two control points
    /// and the end point.
    CurveTo(Point, Point, Point),
}

/// A [`SegmentSink`] that records everything it is given.
///
/// ```
/// use curvefit::{PathBuilder, Point, SegmentSink};
///
/// let mut path = PathBuilder::new();
/// path.move_to(Point::new(1.0, 1.0));
/// let seg = path.emit_cubic((2.0, 1.0).into(), (3.0, 2.0).into(), (3.0, 3.0).into());
/// assert_eq!(seg.start(), Point::new(1.0, 1.0));
/// assert_eq!(path.current_position(), Point::new(3.0, 3.0));
/// assert_eq!(path.segments().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    elements: Vec<PathEl>,
    segments: Vec<Segment>,
    cursor: Point,
}

impl PathBuilder {
    /// Create an empty builder with the cursor at the origin.
    pub fn new() -> PathBuilder {
        PathBuilder::default()
    }

    /// Create an empty builder with the cursor at `p`.
    pub fn starting_at(p: impl Into<Point>) -> PathBuilder {
        let cursor = p.into();
        PathBuilder {
            elements: Vec::new(),
            segments: Vec::new(),
            cursor,
        }
    }

    /// The recorded elements, in order.
    pub fn elements(&self) -> &[PathEl] {
        &self.elements
    }

    /// The emitted segments, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns `true` if no segment has been emitted.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of emitted segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl SegmentSink for PathBuilder {
    fn current_position(&self) -> Point {
        self.cursor
    }

    fn move_to(&mut self, p: Point) {
        // Consecutive moves collapse into one.
        if let Some(PathEl::MoveTo(last)) = self.elements.last_mut() {
            *last = p;
        } else {
            self.elements.push(PathEl::MoveTo(p));
        }
        self.cursor = p;
    }

    fn emit_cubic(&mut self, p1: Point, p2: Point, p3: Point) -> Segment {
        let seg = Segment {
            curve: CubicBez::new(self.cursor, p1, p2, p3),
        };
        self.elements.push(PathEl::CurveTo(p1, p2, p3));
        self.segments.push(seg);
        self.cursor = p3;
        seg
    }
}
