mod arc;
mod line_segment;
mod network_curve;
mod polyline;

pub use arc::Arc;
pub use line_segment::LineSegment;
pub use network_curve::NetworkCurve;
pub use polyline::PolylineCurve;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, TOLERANCE};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns whether `t` lies in the domain, allowing [`TOLERANCE`] slack.
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.t_min - TOLERANCE && t <= self.t_max + TOLERANCE
    }

    /// Rejects parameters outside the domain.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` when `t` is outside.
    pub fn check(&self, parameter: &'static str, t: f64) -> Result<()> {
        if self.contains(t) {
            Ok(())
        } else {
            Err(GeometryError::ParameterOutOfRange {
                parameter,
                value: t,
                min: self.t_min,
                max: self.t_max,
            }
            .into())
        }
    }

    /// Validates a trim interval `[t0, t1]` against this domain.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if either bound is outside
    /// the domain, or `GeometryError::Degenerate` if the interval is empty.
    pub fn check_interval(&self, t0: f64, t1: f64) -> Result<()> {
        self.check("t0", t0)?;
        self.check("t1", t1)?;
        if t1 - t0 < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "trim interval [{t0}, {t1}] is empty"
            ))
            .into());
        }
        Ok(())
    }
}

/// Trait for bounded parametric curves used as segment-graph edges.
///
/// This is the seam to a host geometry kernel: everything the segmentation
/// and tracing operations need from a curve goes through these methods.
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range.
    fn evaluate(&self, t: f64) -> Result<Point3>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns the parameter of the point on the curve closest to `point`.
    fn closest_parameter(&self, point: &Point3) -> f64;

    /// Returns the sub-curve between `t0` and `t1` (`t0 < t1`).
    ///
    /// # Errors
    ///
    /// Returns an error if the interval is empty or leaves the domain.
    fn trim(&self, t0: f64, t1: f64) -> Result<Self>
    where
        Self: Sized;

    /// Point at the start of the domain.
    fn start_point(&self) -> Point3;

    /// Point at the end of the domain.
    fn end_point(&self) -> Point3;

    /// Flattens the curve into a polyline whose chords deviate from the
    /// curve by at most `tolerance`.
    fn to_polyline(&self, tolerance: f64) -> Vec<Point3>;

    /// Returns whether the curve ends where it starts.
    fn is_closed(&self) -> bool {
        nalgebra::distance(&self.start_point(), &self.end_point()) < TOLERANCE
    }
}
