// Copyright 2026 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular arcs and their cubic approximation.

use alloc::vec::Vec;
use core::f64::consts::PI;

use crate::{fit_by_subdivision, FitError, ParamCurve, Point, Segment, SegmentSink, Vec2};

/// An angle in radians, with its sine and cosine computed once.
///
/// ```
/// use curvefit::Angle;
///
/// let a = Angle::from_degrees(90.0);
/// assert!((a.radians() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert!(a.cos().abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angle {
    radians: f64,
    sin: f64,
    cos: f64,
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Angle = Angle {
        radians: 0.0,
        sin: 0.0,
        cos: 1.0,
    };

    /// Create an angle from a value in radians.
    #[inline]
    pub fn from_radians(radians: f64) -> Angle {
        let (sin, cos) = radians.sin_cos();
        Angle { radians, sin, cos }
    }

    /// Create an angle from a value in degrees.
    #[inline]
    pub fn from_degrees(degrees: f64) -> Angle {
        Angle::from_radians(degrees.to_radians())
    }

    /// The angle in radians.
    #[inline]
    pub fn radians(self) -> f64 {
        self.radians
    }

    /// The angle in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        self.sin
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        self.cos
    }

    /// The unit vector pointing in this direction.
    #[inline]
    pub fn to_unit_vec(self) -> Vec2 {
        Vec2::new(self.cos, self.sin)
    }
}

impl Default for Angle {
    fn default() -> Self {
        Angle::ZERO
    }
}

/// A circular arc.
///
/// As a [`ParamCurve`], the parameter is the absolute angle in radians, so
/// the arc itself runs from [`start_param`](Arc::start_param) to
/// [`end_param`](Arc::end_param). Derivatives are exact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    /// The center of the circle.
    pub center: Point,
    /// The radius of the circle.
    pub radius: f64,
    /// The angle of the start point.
    pub start: Angle,
    /// Angle swept by the arc, in radians. Positive values run
    /// counterclockwise in a y-up frame.
    pub sweep: f64,
}

impl Arc {
    /// Create a new arc.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64, start: Angle, sweep: f64) -> Arc {
        Arc {
            center: center.into(),
            radius,
            start,
            sweep,
        }
    }

    /// Create the arc running from `start` to `end`.
    ///
    /// The sweep is `end - start` taken literally, so its sign decides the
    /// direction and its magnitude may exceed a full turn.
    pub fn from_angles(center: impl Into<Point>, radius: f64, start: Angle, end: Angle) -> Arc {
        Arc::new(center, radius, start, end.radians() - start.radians())
    }

    /// Parameter of the start point.
    #[inline]
    pub fn start_param(&self) -> f64 {
        self.start.radians()
    }

    /// Parameter of the end point.
    #[inline]
    pub fn end_param(&self) -> f64 {
        self.start.radians() + self.sweep
    }

    /// The start point.
    #[inline]
    pub fn start_point(&self) -> Point {
        self.center + self.radius * self.start.to_unit_vec()
    }

    /// The end point.
    #[inline]
    pub fn end_point(&self) -> Point {
        self.eval(self.end_param())
    }

    /// Returns `true` if the arc sweeps at least a full circle.
    pub fn is_full_circle(&self) -> bool {
        self.sweep.abs() >= 2.0 * PI
    }
}

impl ParamCurve for Arc {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.center + self.radius * Vec2::from_angle(t)
    }

    #[inline]
    fn tangent(&self, t: f64) -> Vec2 {
        let (s, c) = t.sin_cos();
        Vec2::new(-self.radius * s, self.radius * c)
    }

    #[inline]
    fn acceleration(&self, t: f64) -> Vec2 {
        -self.radius * Vec2::from_angle(t)
    }
}

/// The ways an arc can be described to [`fit_arc`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArcFit {
    /// A circle plus the angles of the two arc endpoints.
    ByAngles {
        /// The center of the circle.
        center: Point,
        /// The radius of the circle.
        radius: f64,
        /// Angle of the start point.
        start: Angle,
        /// Angle of the end point.
        end: Angle,
    },
    /// A ready-made arc.
    ByArc(Arc),
}

impl ArcFit {
    /// The arc this description denotes.
    pub fn to_arc(self) -> Arc {
        match self {
            ArcFit::ByAngles {
                center,
                radius,
                start,
                end,
            } => Arc::from_angles(center, radius, start, end),
            ArcFit::ByArc(arc) => arc,
        }
    }
}

impl From<Arc> for ArcFit {
    fn from(arc: Arc) -> ArcFit {
        ArcFit::ByArc(arc)
    }
}

/// Approximate an arc with cubics to within `tolerance`.
///
/// This resolves `arc` and runs [`fit_by_subdivision`] over its angle range.
///
/// ```
/// use curvefit::{fit_arc, Angle, ArcFit, PathBuilder, Point};
///
/// let mut path = PathBuilder::new();
/// let quarter = ArcFit::ByAngles {
///     center: Point::ORIGIN,
///     radius: 10.0,
///     start: Angle::ZERO,
///     end: Angle::from_degrees(90.0),
/// };
/// let segments = fit_arc(&mut path, quarter, 0.1).unwrap();
/// assert_eq!(segments.len(), 1);
/// ```
///
/// # Errors
///
/// As for [`fit_by_subdivision`]. A non-finite center or radius gives
/// [`FitError::CurveUndefined`].
pub fn fit_arc<S>(
    sink: &mut S,
    arc: impl Into<ArcFit>,
    tolerance: f64,
) -> Result<Vec<Segment>, FitError>
where
    S: SegmentSink + ?Sized,
{
    let arc = arc.into().to_arc();
    fit_by_subdivision(sink, &arc, arc.start_param(), arc.end_param(), tolerance)
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use crate::{
        fit_arc, Angle, Arc, ArcFit, FitError, FnCurve, ParamCurve, PathBuilder, Point, Vec2,
    };

    #[test]
    fn angle_caches_trig() {
        for deg in [-270.0, -45.0, 0.0, 30.0, 180.0, 400.0] {
            let a = Angle::from_degrees(deg);
            let r = f64::to_radians(deg);
            assert!((a.radians() - r).abs() < 1e-12);
            assert!((a.degrees() - deg).abs() < 1e-9);
            assert!((a.sin() - r.sin()).abs() < 1e-12);
            assert!((a.cos() - r.cos()).abs() < 1e-12);
            assert!((a.to_unit_vec().hypot() - 1.0).abs() < 1e-12);
        }
        assert_eq!(Angle::default(), Angle::from_radians(0.0));
    }

    #[test]
    fn arc_derivatives() {
        let arc = Arc::new((1.0, -2.0), 3.0, Angle::from_degrees(20.0), 2.0);
        let numeric = FnCurve(|t: f64| arc.eval(t));
        for i in 0..=10 {
            let t = arc.start_param() + 0.2 * i as f64;
            assert!((arc.tangent(t) - numeric.tangent(t)).hypot() < 1e-6);
            assert!((arc.acceleration(t) - numeric.acceleration(t)).hypot() < 1e-4);
            assert!((arc.curvature(t) - 1.0 / 3.0).abs() < 1e-12);
        }
        assert!(arc.start_point().distance(arc.eval(arc.start_param())) < 1e-12);
    }

    #[test]
    fn call_shapes_agree() {
        let center = Point::new(2.0, 1.0);
        let start = Angle::from_degrees(10.0);
        let end = Angle::from_degrees(200.0);
        let by_angles = ArcFit::ByAngles {
            center,
            radius: 4.0,
            start,
            end,
        };
        let arc = Arc::from_angles(center, 4.0, start, end);
        assert_eq!(by_angles.to_arc(), arc);

        let mut a = PathBuilder::new();
        let mut b = PathBuilder::new();
        let sa = fit_arc(&mut a, by_angles, 0.01).unwrap();
        let sb = fit_arc(&mut b, arc, 0.01).unwrap();
        assert_eq!(sa, sb);
        assert!(sa[0].start().distance(arc.start_point()) < 1e-12);
        assert!(sa[sa.len() - 1].end().distance(arc.end_point()) < 1e-12);
    }

    #[test]
    fn quarter_matches_closure_circle() {
        let mut path = PathBuilder::new();
        let arc = Arc::new(Point::ORIGIN, 10.0, Angle::ZERO, FRAC_PI_2);
        let segs = fit_arc(&mut path, arc, 0.1).unwrap();
        assert_eq!(segs.len(), 1);
        let c = segs[0].curve;
        assert!(c.p1.distance(Point::new(10.0, 5.5228)) < 1e-3);
        assert!(c.p2.distance(Point::new(5.5228, 10.0)) < 1e-3);
    }

    #[test]
    fn clockwise() {
        let mut path = PathBuilder::new();
        let arc = ArcFit::ByAngles {
            center: Point::ORIGIN,
            radius: 10.0,
            start: Angle::from_degrees(90.0),
            end: Angle::ZERO,
        };
        let segs = fit_arc(&mut path, arc, 0.1).unwrap();
        assert_eq!(segs.len(), 1);
        assert!(segs[0].start().distance(Point::new(0.0, 10.0)) < 1e-9);
        assert!(segs[0].end().distance(Point::new(10.0, 0.0)) < 1e-9);
        // Leaves heading in +x.
        assert!(segs[0].start_velocity().dot(Vec2::new(1.0, 0.0)) > 0.0);
    }

    #[test]
    fn full_circle() {
        let arc = Arc::new((0.0, 0.0), 5.0, Angle::ZERO, 2.0 * PI);
        assert!(arc.is_full_circle());
        let mut path = PathBuilder::new();
        let segs = fit_arc(&mut path, arc, 0.001).unwrap();
        assert!(segs.len() >= 4);
        assert!(segs[segs.len() - 1].end().distance(segs[0].start()) < 1e-9);
        for seg in &segs {
            for p in [seg.start(), seg.end()] {
                assert!((p.distance(Point::ORIGIN) - 5.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn undefined_radius() {
        let arc = Arc::new((0.0, 0.0), f64::NAN, Angle::ZERO, 1.0);
        assert!(matches!(
            fit_arc(&mut PathBuilder::new(), arc, 0.1),
            Err(FitError::CurveUndefined { .. })
        ));
    }
}
