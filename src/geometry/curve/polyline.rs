use crate::error::{GeometryError, OperationError, Result};
use crate::math::distance::closest_on_segment;
use crate::math::{Point3, TOLERANCE};

use super::{Curve, CurveDomain};

/// A curve through an ordered list of vertices joined by straight spans.
///
/// Vertex `i` sits at parameter `i`, so the domain is `[0, n - 1]` and span
/// `i` covers `[i, i + 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineCurve {
    points: Vec<Point3>,
}

impl PolylineCurve {
    /// Creates a polyline curve.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for fewer than 2 points and
    /// `GeometryError::Degenerate` when two consecutive vertices coincide.
    pub fn new(points: Vec<Point3>) -> Result<Self> {
        if points.len() < 2 {
            return Err(OperationError::InvalidInput(
                "at least 2 points are required for a polyline curve".to_owned(),
            )
            .into());
        }
        if let Some(i) = points
            .windows(2)
            .position(|w| nalgebra::distance(&w[0], &w[1]) < TOLERANCE)
        {
            return Err(GeometryError::Degenerate(format!(
                "polyline vertices {i} and {} coincide",
                i + 1
            ))
            .into());
        }
        Ok(Self { points })
    }

    /// Creates a polyline in the XY plane from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// See [`PolylineCurve::new`].
    pub fn from_xy(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point3::new(x, y, 0.0)).collect())
    }

    /// Returns the vertices.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    fn span_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Splits `t` into a span index and a local parameter in `[0, 1]`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn locate(&self, t: f64) -> (usize, f64) {
        let last = self.span_count() - 1;
        let i = (t.max(0.0).floor() as usize).min(last);
        #[allow(clippy::cast_precision_loss)]
        let local = t - i as f64;
        (i, local.clamp(0.0, 1.0))
    }
}

impl Curve for PolylineCurve {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        self.domain().check("t", t)?;
        let (i, local) = self.locate(t);
        let a = self.points[i];
        let b = self.points[i + 1];
        Ok(a + (b - a) * local)
    }

    fn domain(&self) -> CurveDomain {
        #[allow(clippy::cast_precision_loss)]
        CurveDomain::new(0.0, self.span_count() as f64)
    }

    fn closest_parameter(&self, point: &Point3) -> f64 {
        let mut best_t = 0.0;
        let mut best_dist = f64::INFINITY;
        for (i, w) in self.points.windows(2).enumerate() {
            let (local, foot) = closest_on_segment(point, &w[0], &w[1]);
            let d = nalgebra::distance(point, &foot);
            if d < best_dist {
                best_dist = d;
                #[allow(clippy::cast_precision_loss)]
                let t = i as f64 + local;
                best_t = t;
            }
        }
        best_t
    }

    fn trim(&self, t0: f64, t1: f64) -> Result<Self> {
        self.domain().check_interval(t0, t1)?;
        let mut points = vec![self.evaluate(t0)?];
        for (k, p) in self.points.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let tk = k as f64;
            if tk > t0 + TOLERANCE && tk < t1 - TOLERANCE {
                points.push(*p);
            }
        }
        let end = self.evaluate(t1)?;
        if points
            .last()
            .is_some_and(|last| nalgebra::distance(last, &end) >= TOLERANCE)
        {
            points.push(end);
        }
        Self::new(points)
    }

    fn start_point(&self) -> Point3 {
        self.points[0]
    }

    fn end_point(&self) -> Point3 {
        self.points[self.points.len() - 1]
    }

    fn to_polyline(&self, _tolerance: f64) -> Vec<Point3> {
        self.points.clone()
    }
}
