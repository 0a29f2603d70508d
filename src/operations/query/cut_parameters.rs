use tracing::debug;

use crate::config::{Tolerances, DEFAULT_ON_CURVE_TOLERANCE};
use crate::geometry::curve::Curve;
use crate::math::{Point3, TOLERANCE};

/// Finds the curve parameters of the points that lie on a curve.
///
/// Each point is projected onto the curve; its parameter is kept only if
/// the projection lands within the on-curve tolerance of the point. Points
/// off the curve are dropped without error, so one point set can be used
/// against every curve of a network. Kept parameters are sorted ascending;
/// two parameters merge when they are closer than [`TOLERANCE`] or their
/// curve points are.
pub struct CutParameters<'a, C> {
    curve: &'a C,
    points: &'a [Point3],
    on_curve: f64,
}

impl<'a, C: Curve> CutParameters<'a, C> {
    /// Creates a new `CutParameters` query.
    #[must_use]
    pub fn new(curve: &'a C, points: &'a [Point3]) -> Self {
        Self {
            curve,
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

    /// Executes the query, returning sorted parameters.
    #[must_use]
    pub fn execute(&self) -> Vec<f64> {
        let mut hits: Vec<(f64, Point3)> = Vec::with_capacity(self.points.len());
        for point in self.points {
            let t = self.curve.closest_parameter(point);
            if let Ok(foot) = self.curve.evaluate(t) {
                if nalgebra::distance(&foot, point) <= self.on_curve {
                    hits.push((t, foot));
                }
            }
        }

        hits.sort_by(|a, b| a.0.total_cmp(&b.0));
        hits.dedup_by(|a, b| {
            (a.0 - b.0).abs() < TOLERANCE || nalgebra::distance(&a.1, &b.1) < TOLERANCE
        });
        let params: Vec<f64> = hits.into_iter().map(|(t, _)| t).collect();

        debug!(
            points = self.points.len(),
            kept = params.len(),
            "cut parameters"
        );
        params
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::{LineSegment, PolylineCurve};

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn keeps_on_curve_points_sorted() {
        let line = LineSegment::xy(0.0, 0.0, 10.0, 0.0).unwrap();
        let pts = [p(8.0, 0.0), p(2.0, 0.05), p(5.0, 0.0)];
        let params = CutParameters::new(&line, &pts).execute();
        assert_eq!(params.len(), 3);
        assert!((params[0] - 0.2).abs() < 1e-12);
        assert!((params[1] - 0.5).abs() < 1e-12);
        assert!((params[2] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn drops_points_off_the_curve() {
        let line = LineSegment::xy(0.0, 0.0, 10.0, 0.0).unwrap();
        let pts = [p(2.0, 0.0), p(5.0, 0.2), p(20.0, 0.0)];
        let params = CutParameters::new(&line, &pts).execute();
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn on_curve_tolerance_is_configurable() {
        let line = LineSegment::xy(0.0, 0.0, 10.0, 0.0).unwrap();
        let pts = [p(5.0, 0.2)];
        let params = CutParameters::new(&line, &pts)
            .with_on_curve_tolerance(0.5)
            .execute();
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn merges_duplicate_points() {
        let curve = PolylineCurve::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]).unwrap();
        let pts = [p(10.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)];
        let params = CutParameters::new(&curve, &pts).execute();
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn merges_points_closer_than_tolerance_in_space() {
        // On a short line the parameter gap exceeds TOLERANCE while the
        // points themselves are closer than it.
        let line = LineSegment::xy(0.0, 0.0, 0.5, 0.0).unwrap();
        let pts = [p(0.0, 0.0), p(0.25, 0.0), p(0.25 + 8e-11, 0.0), p(0.5, 0.0)];
        let params = CutParameters::new(&line, &pts).execute();
        assert_eq!(params.len(), 3);
    }
}
