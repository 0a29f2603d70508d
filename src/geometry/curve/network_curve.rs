use crate::error::Result;
use crate::math::Point3;

use super::{Arc, Curve, CurveDomain, LineSegment, PolylineCurve};

/// A curve of any supported kind, for networks that mix lines, polylines
/// and arcs. Trimming preserves the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCurve {
    Line(LineSegment),
    Polyline(PolylineCurve),
    Arc(Arc),
}

impl From<LineSegment> for NetworkCurve {
    fn from(line: LineSegment) -> Self {
        Self::Line(line)
    }
}

impl From<PolylineCurve> for NetworkCurve {
    fn from(polyline: PolylineCurve) -> Self {
        Self::Polyline(polyline)
    }
}

impl From<Arc> for NetworkCurve {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

impl Curve for NetworkCurve {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        match self {
            Self::Line(c) => c.evaluate(t),
            Self::Polyline(c) => c.evaluate(t),
            Self::Arc(c) => c.evaluate(t),
        }
    }

    fn domain(&self) -> CurveDomain {
        match self {
            Self::Line(c) => c.domain(),
            Self::Polyline(c) => c.domain(),
            Self::Arc(c) => c.domain(),
        }
    }

    fn closest_parameter(&self, point: &Point3) -> f64 {
        match self {
            Self::Line(c) => c.closest_parameter(point),
            Self::Polyline(c) => c.closest_parameter(point),
            Self::Arc(c) => c.closest_parameter(point),
        }
    }

    fn trim(&self, t0: f64, t1: f64) -> Result<Self> {
        Ok(match self {
            Self::Line(c) => Self::Line(c.trim(t0, t1)?),
            Self::Polyline(c) => Self::Polyline(c.trim(t0, t1)?),
            Self::Arc(c) => Self::Arc(c.trim(t0, t1)?),
        })
    }

    fn start_point(&self) -> Point3 {
        match self {
            Self::Line(c) => c.start_point(),
            Self::Polyline(c) => c.start_point(),
            Self::Arc(c) => c.start_point(),
        }
    }

    fn end_point(&self) -> Point3 {
        match self {
            Self::Line(c) => c.end_point(),
            Self::Polyline(c) => c.end_point(),
            Self::Arc(c) => c.end_point(),
        }
    }

    fn to_polyline(&self, tolerance: f64) -> Vec<Point3> {
        match self {
            Self::Line(c) => c.to_polyline(tolerance),
            Self::Polyline(c) => c.to_polyline(tolerance),
            Self::Arc(c) => c.to_polyline(tolerance),
        }
    }

    fn is_closed(&self) -> bool {
        match self {
            Self::Line(c) => c.is_closed(),
            Self::Polyline(c) => c.is_closed(),
            Self::Arc(c) => c.is_closed(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn trim_preserves_variant() {
        let arc: NetworkCurve = Arc::in_xy(Point3::origin(), 2.0, 0.0, FRAC_PI_2)
            .unwrap()
            .into();
        assert!(matches!(arc.trim(0.1, 0.2).unwrap(), NetworkCurve::Arc(_)));

        let line: NetworkCurve = LineSegment::xy(0.0, 0.0, 4.0, 0.0).unwrap().into();
        let sub = line.trim(0.25, 0.5).unwrap();
        assert!(matches!(sub, NetworkCurve::Line(_)));
        assert!((sub.start_point().x - 1.0).abs() < TOLERANCE);
    }
}
