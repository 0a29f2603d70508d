use std::f64::consts::FRAC_PI_2;

use tracing::debug;

use crate::config::{Tolerances, DEFAULT_COLLINEAR_ANGLE};
use crate::error::{GeometryError, OperationError, PolytraceError, Result};
use crate::math::angle_2d::rotate_and_scale;
use crate::math::polygon_2d::is_ccw_turn;
use crate::math::Point3;

/// Which side of a counter-clockwise polygon the offset points land on.
///
/// `Outward` rotates each edge by -90° and `Inward` by +90°. Callers that
/// pass an inner/outer flag with the opposite rotation get the mirrored
/// side: their `inner = false` corresponds to [`OffsetSide::Inward`] here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetSide {
    /// Right of each counter-clockwise edge (away from the interior).
    Outward,
    /// Left of each counter-clockwise edge (into the interior).
    Inward,
}

impl OffsetSide {
    /// Maps the `inward` flag used by callers to a side.
    #[must_use]
    pub fn from_inward(inward: bool) -> Self {
        if inward {
            Self::Inward
        } else {
            Self::Outward
        }
    }

    /// Rotation sign applied at counter-clockwise vertices.
    fn sign(self) -> f64 {
        match self {
            Self::Outward => -1.0,
            Self::Inward => 1.0,
        }
    }
}

/// Offsets the vertices of a planar polyline one edge at a time.
///
/// Each emitted point sits exactly `|distance|` from the start vertex of an
/// edge, perpendicular to that edge. The side is chosen per vertex: the
/// requested side where the path turns counter-clockwise (or runs straight
/// within the collinear threshold), the opposite side where it turns
/// clockwise. The first edge has no incoming edge and always uses the
/// requested side.
///
/// By default the closing edge `last → first` is not offset, so `n` points
/// yield `n - 1` offset points. [`PointOffset2D::closed`] adds it.
#[derive(Debug)]
pub struct PointOffset2D {
    points: Vec<Point3>,
    distance: f64,
    side: OffsetSide,
    closed: bool,
    collinear_angle: f64,
}

impl PointOffset2D {
    /// Creates a new point offset operation.
    #[must_use]
    pub fn new(points: Vec<Point3>, distance: f64, side: OffsetSide) -> Self {
        Self {
            points,
            distance,
            side,
            closed: false,
            collinear_angle: DEFAULT_COLLINEAR_ANGLE,
        }
    }

    /// Also offsets the closing edge, emitting one point per input point.
    #[must_use]
    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Overrides the collinear threshold (radians) of the CCW test.
    #[must_use]
    pub fn with_collinear_angle(mut self, collinear_angle: f64) -> Self {
        self.collinear_angle = collinear_angle;
        self
    }

    /// Takes the collinear threshold from a [`Tolerances`] value.
    #[must_use]
    pub fn with_tolerances(self, tolerances: &Tolerances) -> Self {
        self.with_collinear_angle(tolerances.collinear_angle)
    }

    /// Executes the offset.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if fewer than 3 points are given or
    ///   the distance is not finite
    /// - `GeometryError::Degenerate` if an edge has zero length
    pub fn execute(&self) -> Result<Vec<Point3>> {
        let n = self.points.len();
        if n < 3 {
            return Err(OperationError::InvalidInput(format!(
                "at least 3 points are required for point offset, got {n}"
            ))
            .into());
        }
        if !self.distance.is_finite() {
            return Err(OperationError::InvalidInput(format!(
                "offset distance must be finite, got {}",
                self.distance
            ))
            .into());
        }

        let pts = &self.points;
        let base = self.side.sign() * FRAC_PI_2;
        let mut result = Vec::with_capacity(n);

        result.push(
            rotate_and_scale(&pts[0], &pts[1], base, self.distance)
                .map_err(|e| at_vertex(e, 0))?,
        );

        for i in 1..n - 1 {
            result.push(self.offset_vertex(&pts[i - 1], &pts[i], &pts[i + 1], i, base)?);
        }

        if self.closed {
            result.push(self.offset_vertex(&pts[n - 2], &pts[n - 1], &pts[0], n - 1, base)?);
        }

        debug!(
            input = n,
            output = result.len(),
            distance = self.distance,
            side = ?self.side,
            "point offset"
        );
        Ok(result)
    }

    /// Offsets the edge `current → next`, picking the side from the turn
    /// `prev → current → next`.
    fn offset_vertex(
        &self,
        prev: &Point3,
        current: &Point3,
        next: &Point3,
        index: usize,
        base: f64,
    ) -> Result<Point3> {
        let ccw = is_ccw_turn(prev, current, next, self.collinear_angle)
            .map_err(|e| at_vertex(e, index))?;
        let angle = if ccw { base } else { -base };
        rotate_and_scale(current, next, angle, self.distance).map_err(|e| at_vertex(e, index))
    }
}

/// Offsets `points` by `distance`, one point per edge excluding the closing
/// edge.
///
/// # Errors
///
/// See [`PointOffset2D::execute`].
pub fn offset(points: &[Point3], distance: f64, inward: bool) -> Result<Vec<Point3>> {
    PointOffset2D::new(points.to_vec(), distance, OffsetSide::from_inward(inward)).execute()
}

/// Attaches the vertex index to a zero-length-vector failure.
fn at_vertex(err: PolytraceError, index: usize) -> PolytraceError {
    match err {
        PolytraceError::Geometry(GeometryError::ZeroVector) => GeometryError::Degenerate(
            format!("zero-length edge at vertex {index}"),
        )
        .into(),
        other => other,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::polygon_2d::signed_area_2d;
    use crate::math::Vector3;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    fn square() -> Vec<Point3> {
        vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]
    }

    fn regular_ngon(n: usize, radius: f64) -> Vec<Point3> {
        (0..n)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let a = std::f64::consts::TAU * i as f64 / n as f64;
                p(radius * a.cos(), radius * a.sin())
            })
            .collect()
    }

    #[test]
    fn square_outward_closed() {
        let result = PointOffset2D::new(square(), 1.0, OffsetSide::Outward)
            .closed(true)
            .execute()
            .unwrap();
        let expected = [p(0.0, -1.0), p(11.0, 0.0), p(10.0, 11.0), p(-1.0, 10.0)];
        assert_eq!(result.len(), 4);
        for (got, want) in result.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(got.x, want.x, epsilon = 1e-9);
            assert_abs_diff_eq!(got.y, want.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn square_offset_is_symmetric() {
        for side in [OffsetSide::Outward, OffsetSide::Inward] {
            let result = PointOffset2D::new(square(), 1.0, side)
                .closed(true)
                .execute()
                .unwrap();
            let center = p(5.0, 5.0);
            let r0 = nalgebra::distance(&result[0], &center);
            for q in &result {
                assert_abs_diff_eq!(nalgebra::distance(q, &center), r0, epsilon = 1e-9);
            }
            let sum = result.iter().fold(Vector3::zeros(), |acc, q| acc + q.coords);
            assert_abs_diff_eq!(sum.x / 4.0, 5.0, epsilon = 1e-9);
            assert_abs_diff_eq!(sum.y / 4.0, 5.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn open_mode_drops_closing_edge() {
        let result = offset(&square(), 1.0, false).unwrap();
        assert_eq!(result.len(), 3);
        assert_abs_diff_eq!(result[2].x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result[2].y, 11.0, epsilon = 1e-9);
    }

    #[test]
    fn outward_grows_and_inward_shrinks_convex_ccw() {
        for n in [3, 4, 5, 8, 12] {
            let poly = regular_ngon(n, 10.0);
            let area = signed_area_2d(&poly);
            assert!(area > 0.0);
            let out = PointOffset2D::new(poly.clone(), 0.5, OffsetSide::Outward)
                .closed(true)
                .execute()
                .unwrap();
            let inn = PointOffset2D::new(poly, 0.5, OffsetSide::Inward)
                .closed(true)
                .execute()
                .unwrap();
            assert!(signed_area_2d(&out) > area, "n={n}");
            assert!(signed_area_2d(&inn) < area, "n={n}");
        }
    }

    #[test]
    fn every_point_at_exact_distance_from_its_vertex() {
        let poly = vec![p(0.0, 0.0), p(7.0, 1.0), p(9.0, 6.0), p(4.0, 4.0), p(1.0, 8.0)];
        let result = PointOffset2D::new(poly.clone(), 2.5, OffsetSide::Outward)
            .closed(true)
            .execute()
            .unwrap();
        for (q, v) in result.iter().zip(poly.iter()) {
            assert_abs_diff_eq!(nalgebra::distance(q, v), 2.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn opposite_sides_mirror_through_vertex() {
        let poly = regular_ngon(6, 4.0);
        let out = PointOffset2D::new(poly.clone(), 1.0, OffsetSide::Outward)
            .closed(true)
            .execute()
            .unwrap();
        let inn = PointOffset2D::new(poly.clone(), 1.0, OffsetSide::Inward)
            .closed(true)
            .execute()
            .unwrap();
        for ((a, b), v) in out.iter().zip(inn.iter()).zip(poly.iter()) {
            assert_abs_diff_eq!((a - v).x, -(b - v).x, epsilon = 1e-9);
            assert_abs_diff_eq!((a - v).y, -(b - v).y, epsilon = 1e-9);
        }
    }

    #[test]
    fn reflex_vertex_flips_side() {
        // CCW L-shape; vertex 3 at (5, 5) is reflex.
        let poly = vec![
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(10.0, 5.0),
            p(5.0, 5.0),
            p(5.0, 10.0),
            p(0.0, 10.0),
        ];
        let result = PointOffset2D::new(poly, 1.0, OffsetSide::Outward)
            .closed(true)
            .execute()
            .unwrap();
        // Edge (5,5) -> (5,10) points up; the clockwise turn flips the
        // outward rotation to the left.
        assert_abs_diff_eq!(result[3].x, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result[3].y, 5.0, epsilon = 1e-9);
        // Convex vertex 2: edge (10,5) -> (5,5) points left, offset goes up.
        assert_abs_diff_eq!(result[2].x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result[2].y, 6.0, epsilon = 1e-9);
    }

    #[test]
    fn collinear_vertex_keeps_requested_side() {
        let poly = vec![p(0.0, 0.0), p(5.0, 0.0), p(10.0, -0.01), p(10.0, 10.0)];
        let result = offset(&poly, 1.0, false).unwrap();
        // Turn at (5, 0) is ~0.1 degrees clockwise: treated as straight.
        assert!(result[1].y < 0.0);
    }

    #[test]
    fn rejects_short_input() {
        let err = offset(&[p(0.0, 0.0), p(1.0, 0.0)], 1.0, false).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn rejects_non_finite_distance() {
        assert!(offset(&square(), f64::INFINITY, true).unwrap_err().is_invalid_input());
    }

    #[test]
    fn duplicate_vertex_reports_index() {
        let poly = vec![p(0.0, 0.0), p(5.0, 0.0), p(5.0, 0.0), p(5.0, 5.0)];
        let err = offset(&poly, 1.0, false).unwrap_err();
        assert!(err.is_degenerate());
        assert!(err.to_string().contains("vertex 1"), "{err}");
    }
}
