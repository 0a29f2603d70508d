use crate::geometry::curve::Curve;
use crate::math::Point3;

/// A node adjacent to a queried point, and the segment that reaches it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// The far endpoint of the segment.
    pub point: Point3,
    /// Index of the segment in the input slice.
    pub segment: usize,
}

/// Endpoints of one input segment.
#[derive(Debug, Clone, Copy)]
struct Ends {
    start: Point3,
    end: Point3,
}

/// Implicit planar graph over a set of segments.
///
/// Nodes are endpoint locations, identified up to `tolerance`; each
/// segment is an undirected edge between its two endpoints. Neighbor
/// queries scan every segment.
#[derive(Debug)]
pub struct SegmentGraph {
    ends: Vec<Ends>,
    tolerance: f64,
}

impl SegmentGraph {
    /// Builds the graph from the endpoints of `segments`.
    #[must_use]
    pub fn new<C: Curve>(segments: &[C], tolerance: f64) -> Self {
        let ends = segments
            .iter()
            .map(|s| Ends {
                start: s.start_point(),
                end: s.end_point(),
            })
            .collect();
        Self { ends, tolerance }
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    /// Returns `true` when the graph has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// Node coincidence distance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns whether two points are the same node.
    #[must_use]
    pub fn is_same_node(&self, a: &Point3, b: &Point3) -> bool {
        nalgebra::distance(a, b) < self.tolerance
    }

    /// Far endpoints of the segments touching `node` at exactly one end.
    ///
    /// A segment whose ends are both within tolerance of `node` is too short
    /// to leave it and contributes nothing. Results follow segment order.
    #[must_use]
    pub fn neighbors(&self, node: &Point3) -> Vec<Neighbor> {
        let tol = self.tolerance;
        let mut result = Vec::new();
        for (segment, ends) in self.ends.iter().enumerate() {
            let to_start = nalgebra::distance(node, &ends.start);
            let to_end = nalgebra::distance(node, &ends.end);
            if to_start < tol && to_end > tol {
                result.push(Neighbor {
                    point: ends.end,
                    segment,
                });
            } else if to_start > tol && to_end < tol {
                result.push(Neighbor {
                    point: ends.start,
                    segment,
                });
            }
        }
        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::LineSegment;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn neighbors_from_either_end() {
        let segments = vec![
            LineSegment::xy(0.0, 0.0, 10.0, 0.0).unwrap(),
            LineSegment::xy(0.0, 10.0, 0.0, 0.0).unwrap(),
            LineSegment::xy(5.0, 5.0, 6.0, 6.0).unwrap(),
        ];
        let graph = SegmentGraph::new(&segments, 0.5);
        let nb = graph.neighbors(&p(0.0, 0.0));
        assert_eq!(nb.len(), 2);
        assert_eq!(nb[0].segment, 0);
        assert!((nb[0].point.x - 10.0).abs() < 1e-12);
        assert_eq!(nb[1].segment, 1);
        assert!((nb[1].point.y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn matches_within_tolerance() {
        let segments = vec![LineSegment::xy(0.3, 0.0, 10.0, 0.0).unwrap()];
        let graph = SegmentGraph::new(&segments, 0.5);
        assert_eq!(graph.neighbors(&p(0.0, 0.0)).len(), 1);
        assert!(graph.neighbors(&p(-0.3, 0.0)).is_empty());
    }

    #[test]
    fn short_segment_contributes_nothing() {
        let segments = vec![LineSegment::xy(0.0, 0.0, 0.2, 0.1).unwrap()];
        let graph = SegmentGraph::new(&segments, 0.5);
        assert!(graph.neighbors(&p(0.1, 0.0)).is_empty());
    }

    #[test]
    fn same_node_test() {
        let graph = SegmentGraph::new::<LineSegment>(&[], 0.5);
        assert!(graph.is_empty());
        assert!(graph.is_same_node(&p(0.0, 0.0), &p(0.3, 0.3)));
        assert!(!graph.is_same_node(&p(0.0, 0.0), &p(0.4, 0.4)));
    }
}
