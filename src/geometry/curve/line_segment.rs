use crate::error::{GeometryError, Result};
use crate::math::distance::closest_on_segment;
use crate::math::{Point3, TOLERANCE};

use super::{Curve, CurveDomain};

/// A bounded straight segment.
///
/// The parametric form is `P(t) = start + t * (end - start)` for `t` in
/// `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    start: Point3,
    end: Point3,
}

impl LineSegment {
    /// Creates a new segment.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the endpoints coincide.
    pub fn new(start: Point3, end: Point3) -> Result<Self> {
        if nalgebra::distance(&start, &end) < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self { start, end })
    }

    /// Shorthand for a segment in the XY plane.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the endpoints coincide.
    pub fn xy(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self> {
        Self::new(Point3::new(x0, y0, 0.0), Point3::new(x1, y1, 0.0))
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }
}

impl Curve for LineSegment {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        self.domain().check("t", t)?;
        Ok(self.start + (self.end - self.start) * t)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn closest_parameter(&self, point: &Point3) -> f64 {
        closest_on_segment(point, &self.start, &self.end).0
    }

    fn trim(&self, t0: f64, t1: f64) -> Result<Self> {
        self.domain().check_interval(t0, t1)?;
        Self::new(self.evaluate(t0)?, self.evaluate(t1)?)
    }

    fn start_point(&self) -> Point3 {
        self.start
    }

    fn end_point(&self) -> Point3 {
        self.end
    }

    fn to_polyline(&self, _tolerance: f64) -> Vec<Point3> {
        vec![self.start, self.end]
    }
}
