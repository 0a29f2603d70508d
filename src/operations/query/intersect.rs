use tracing::debug;

use crate::geometry::curve::Curve;
use crate::math::distance::push_unique;
use crate::math::intersect_2d::{collinear_contacts_2d, segment_segment_intersect_2d};
use crate::math::Point3;

/// Chord deviation used when flattening curves for intersection.
const DEFAULT_FLATTEN_TOLERANCE: f64 = 1e-3;

/// Distance below which two intersection points are the same point.
const DEFAULT_MERGE_TOLERANCE: f64 = 1e-6;

/// Computes the intersection points of two curves in the XY plane.
///
/// Both curves are flattened with [`Curve::to_polyline`]; arcs are
/// therefore intersected up to the flattening tolerance. Collinear spans
/// that touch end to end contribute the touch point; overlapping spans
/// contribute the two ends of the overlap.
pub struct CurveCurveIntersect<'a, A, B> {
    curve_a: &'a A,
    curve_b: &'a B,
    flatten: f64,
    merge: f64,
}

impl<'a, A: Curve, B: Curve> CurveCurveIntersect<'a, A, B> {
    /// Creates a new `CurveCurveIntersect` query.
    #[must_use]
    pub fn new(curve_a: &'a A, curve_b: &'a B) -> Self {
        Self {
            curve_a,
            curve_b,
            flatten: DEFAULT_FLATTEN_TOLERANCE,
            merge: DEFAULT_MERGE_TOLERANCE,
        }
    }

    /// Overrides the chord deviation used to flatten curved input.
    #[must_use]
    pub fn with_flatten_tolerance(mut self, flatten: f64) -> Self {
        self.flatten = flatten;
        self
    }

    /// Overrides the distance below which two intersection points merge.
    #[must_use]
    pub fn with_merge_tolerance(mut self, merge: f64) -> Self {
        self.merge = merge;
        self
    }

    /// Executes the query, returning every distinct intersection point.
    #[must_use]
    pub fn execute(&self) -> Vec<Point3> {
        let a = self.curve_a.to_polyline(self.flatten);
        let b = self.curve_b.to_polyline(self.flatten);
        let mut points = Vec::new();
        for sa in a.windows(2) {
            for sb in b.windows(2) {
                if let Some(hit) = segment_segment_intersect_2d(&sa[0], &sa[1], &sb[0], &sb[1]) {
                    push_unique(&mut points, hit.point, self.merge);
                } else {
                    for contact in collinear_contacts_2d(&sa[0], &sa[1], &sb[0], &sb[1]) {
                        push_unique(&mut points, contact, self.merge);
                    }
                }
            }
        }
        points
    }

    /// Returns whether the curves touch or cross at all.
    #[must_use]
    pub fn intersects(&self) -> bool {
        !self.execute().is_empty()
    }
}

/// Collects the points a curve network should be cut at: every pairwise
/// intersection (endpoint touches included), without duplicates.
///
/// Splitting at these points keeps only the pieces between crossings, so
/// dangling arms past the last crossing are discarded. The result feeds
/// [`crate::operations::modification::SplitAtPoints`].
pub struct NetworkCutPoints<'a, C> {
    curves: &'a [C],
    flatten: f64,
    merge: f64,
    endpoints: bool,
}

impl<'a, C: Curve> NetworkCutPoints<'a, C> {
    /// Creates a new `NetworkCutPoints` query.
    #[must_use]
    pub fn new(curves: &'a [C]) -> Self {
        Self {
            curves,
            flatten: DEFAULT_FLATTEN_TOLERANCE,
            merge: DEFAULT_MERGE_TOLERANCE,
            endpoints: false,
        }
    }

    /// Also cuts at every curve endpoint, keeping dangling arms.
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: bool) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Overrides the distance below which two cut points merge.
    #[must_use]
    pub fn with_merge_tolerance(mut self, merge: f64) -> Self {
        self.merge = merge;
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Vec<Point3> {
        let mut points = Vec::new();
        if self.endpoints {
            for curve in self.curves {
                push_unique(&mut points, curve.start_point(), self.merge);
                push_unique(&mut points, curve.end_point(), self.merge);
            }
        }
        for (i, a) in self.curves.iter().enumerate() {
            for b in &self.curves[i + 1..] {
                let hits = CurveCurveIntersect::new(a, b)
                    .with_flatten_tolerance(self.flatten)
                    .with_merge_tolerance(self.merge)
                    .execute();
                for hit in hits {
                    push_unique(&mut points, hit, self.merge);
                }
            }
        }
        debug!(
            curves = self.curves.len(),
            cut_points = points.len(),
            "network cut points"
        );
        points
    }
}
