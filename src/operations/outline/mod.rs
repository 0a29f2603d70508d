//! Boundary cycle tracing over planar segment networks.
//!
//! The segments form an implicit graph whose nodes are endpoint locations
//! (identified up to a distance tolerance). [`TraceOutline`] walks from a
//! start node, always taking the sharpest counter-clockwise turn relative to
//! the incoming direction, until the start node is adjacent again.
//!
//! The walk has no global view of the network. A dangling segment that
//! branches off to the left of the walk is followed into its dead end and
//! the trace fails with a disconnection error; prune such arms first, for
//! example by cutting with [`crate::operations::query::NetworkCutPoints`]
//! (intersections only) and tracing the pieces.

mod graph;
mod polar;
mod walk;

pub use graph::{Neighbor, SegmentGraph};

use tracing::debug;

use crate::config::{Tolerances, DEFAULT_NODE_TOLERANCE};
use crate::error::{OperationError, Result};
use crate::geometry::curve::Curve;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point3;
use crate::operations::modification::SplitAtPoints;

/// A traced cycle.
///
/// `points[0]` is the start point as given by the caller; later points are
/// segment endpoints as stored in the input. `segments[i]` is the index of
/// the input segment joining `points[i]` to the next point, the last entry
/// being the segment that closes back to the start.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    points: Vec<Point3>,
    segments: Vec<usize>,
}

impl Outline {
    /// Cycle nodes in walk order. The closing node is not repeated.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Input segment indices in walk order, closing segment last.
    #[must_use]
    pub fn segments(&self) -> &[usize] {
        &self.segments
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for a traced outline; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The start point.
    #[must_use]
    pub fn start(&self) -> Option<&Point3> {
        self.points.first()
    }

    /// Signed area of the cycle in the XY plane (positive when CCW).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Returns `true` if the nodes wind counter-clockwise.
    #[must_use]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// The same cycle walked the other way, still starting at the start point.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        if points.len() > 1 {
            points[1..].reverse();
        }
        let mut segments = self.segments.clone();
        segments.reverse();
        Self { points, segments }
    }

    /// Consumes the outline, returning its nodes.
    #[must_use]
    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }
}

/// Traces the cycle through a start point over a set of segments.
pub struct TraceOutline<'a, C> {
    start: Point3,
    segments: &'a [C],
    tolerance: f64,
    max_steps: Option<usize>,
}

impl<'a, C: Curve> TraceOutline<'a, C> {
    /// Creates a new `TraceOutline` operation with the default node
    /// tolerance.
    #[must_use]
    pub fn new(start: Point3, segments: &'a [C]) -> Self {
        Self {
            start,
            segments,
            tolerance: DEFAULT_NODE_TOLERANCE,
            max_steps: None,
        }
    }

    /// Sets the node coincidence distance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Takes the node coincidence distance from a [`Tolerances`] value.
    #[must_use]
    pub fn with_tolerances(self, tolerances: &Tolerances) -> Self {
        self.with_tolerance(tolerances.node)
    }

    /// Caps the number of nodes appended after the start. Defaults to the
    /// segment count.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Executes the trace.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if there are no segments or the
    ///   tolerance is not finite and positive.
    /// - `GraphError::Disconnected` if the walk reaches a node with no
    ///   unvisited neighbor before closing.
    /// - `GraphError::IterationLimit` if the step cap is exceeded.
    pub fn execute(&self) -> Result<Outline> {
        if self.segments.is_empty() {
            return Err(OperationError::InvalidInput("no segments to trace".into()).into());
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "node tolerance must be finite and positive, got {}",
                self.tolerance
            ))
            .into());
        }

        let graph = SegmentGraph::new(self.segments, self.tolerance);
        let max_steps = self.max_steps.unwrap_or(graph.len());
        debug!(
            segments = graph.len(),
            x = self.start.x,
            y = self.start.y,
            tolerance = self.tolerance,
            "tracing outline"
        );
        let outline = walk::walk_cycle(&graph, self.start, max_steps)?;
        debug!(nodes = outline.len(), "outline closed");
        Ok(outline)
    }
}

/// Traces the cycle through `start` with default tolerances and returns its
/// nodes.
///
/// # Errors
///
/// See [`TraceOutline::execute`].
pub fn trace<C: Curve>(start: Point3, segments: &[C]) -> Result<Vec<Point3>> {
    TraceOutline::new(start, segments)
        .execute()
        .map(Outline::into_points)
}

/// An outline traced over pieces cut from a curve network.
#[derive(Debug, Clone)]
pub struct NetworkOutline<C> {
    /// The traced cycle; its segment indices refer to `pieces`.
    pub outline: Outline,
    /// Every piece produced by the split, in split order.
    pub pieces: Vec<C>,
}

impl<C> NetworkOutline<C> {
    /// The pieces the cycle runs along, in walk order.
    #[must_use]
    pub fn outline_curves(&self) -> Vec<&C> {
        self.outline
            .segments()
            .iter()
            .filter_map(|&i| self.pieces.get(i))
            .collect()
    }
}

/// Splits a curve network at cut points and traces the cycle through a start
/// point over the resulting pieces.
pub struct OutlineFromCurves<'a, C> {
    curves: &'a [C],
    cut_points: &'a [Point3],
    start: Point3,
    tolerances: Tolerances,
}

impl<'a, C: Curve> OutlineFromCurves<'a, C> {
    /// Creates a new `OutlineFromCurves` operation with default tolerances.
    #[must_use]
    pub fn new(curves: &'a [C], cut_points: &'a [Point3], start: Point3) -> Self {
        Self {
            curves,
            cut_points,
            start,
            tolerances: Tolerances::default(),
        }
    }

    /// Sets the tolerances shared by the split and the trace.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Executes the split and the trace.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerances are invalid, a curve rejects a
    /// trim, or the trace fails (see [`TraceOutline::execute`]).
    pub fn execute(&self) -> Result<NetworkOutline<C>> {
        self.tolerances.validate()?;
        let pieces = SplitAtPoints::new(self.curves, self.cut_points)
            .with_tolerances(&self.tolerances)
            .execute()?;
        let outline = TraceOutline::new(self.start, &pieces)
            .with_tolerances(&self.tolerances)
            .execute()?;
        Ok(NetworkOutline { outline, pieces })
    }
}
