use tracing::debug;

use crate::config::{Tolerances, DEFAULT_ON_CURVE_TOLERANCE};
use crate::error::Result;
use crate::geometry::curve::Curve;
use crate::math::Point3;

use super::CutParameters;

/// Finds the outermost cut points of each curve: the points at the smallest
/// and largest parameter among the points that lie on it.
///
/// A curve touched by a single point reports that point twice. A curve
/// that no point lies on contributes nothing.
pub struct CutExtents<'a, C> {
    curves: &'a [C],
    points: &'a [Point3],
    on_curve: f64,
}

impl<'a, C: Curve> CutExtents<'a, C> {
    /// Creates a new `CutExtents` query over one or more curves.
    #[must_use]
    pub fn new(curves: &'a [C], points: &'a [Point3]) -> Self {
        Self {
            curves,
            points,
            on_curve: DEFAULT_ON_CURVE_TOLERANCE,
        }
    }

    /// Overrides the on-curve acceptance distance.
    #[must_use]
    pub fn with_on_curve_tolerance(mut self, on_curve: f64) -> Self {
        self.on_curve = on_curve;
        self
    }

    /// Takes the on-curve acceptance distance from a [`Tolerances`] value.
    #[must_use]
    pub fn with_tolerances(self, tolerances: &Tolerances) -> Self {
        self.with_on_curve_tolerance(tolerances.on_curve)
    }

    /// Executes the query for a single curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve fails to evaluate at a kept parameter.
    pub fn for_curve(&self, curve: &C) -> Result<Option<(Point3, Point3)>> {
        let params = CutParameters::new(curve, self.points)
            .with_on_curve_tolerance(self.on_curve)
            .execute();
        let (Some(&first), Some(&last)) = (params.first(), params.last()) else {
            return Ok(None);
        };
        Ok(Some((curve.evaluate(first)?, curve.evaluate(last)?)))
    }

    /// Executes the query, returning `[min, max]` per curve concatenated in
    /// curve order.
    ///
    /// # Errors
    ///
    /// Returns an error if a curve fails to evaluate at a kept parameter.
    pub fn execute(&self) -> Result<Vec<Point3>> {
        let mut result = Vec::with_capacity(self.curves.len() * 2);
        for (i, curve) in self.curves.iter().enumerate() {
            match self.for_curve(curve)? {
                Some((lo, hi)) => {
                    result.push(lo);
                    result.push(hi);
                }
                None => debug!(curve = i, "no cut points on curve"),
            }
        }
        Ok(result)
    }
}
