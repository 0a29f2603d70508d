pub mod curve;

pub use curve::{Arc, Curve, CurveDomain, LineSegment, NetworkCurve, PolylineCurve};
