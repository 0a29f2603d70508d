use tracing::trace;

use crate::error::{GraphError, Result};
use crate::math::distance::min_distance;
use crate::math::{Point3, Vector3};

use super::graph::{Neighbor, SegmentGraph};
use super::polar::sort_by_turn;
use super::Outline;

/// States of the cycle walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    /// Leave the start node, measuring turns from +X.
    Init,
    /// Take the sharpest counter-clockwise turn to an unvisited node.
    Walking,
    /// Stop if the newest node is adjacent to the start.
    CheckDone,
    Terminal,
}

/// Walks the cycle through `start`, turning as far counter-clockwise as
/// possible at each node, until the start node is adjacent again.
///
/// At most `max_steps` nodes are appended after `start`.
pub(super) fn walk_cycle(graph: &SegmentGraph, start: Point3, max_steps: usize) -> Result<Outline> {
    let mut walk = Walk {
        graph,
        points: vec![start],
        segments: Vec::new(),
        max_steps,
    };

    let mut state = WalkState::Init;
    while state != WalkState::Terminal {
        state = match state {
            WalkState::Init => {
                let sorted = sort_by_turn(&start, &Vector3::x(), graph.neighbors(&start))?;
                walk.advance(sorted.into_iter().next())?;
                WalkState::Walking
            }
            WalkState::Walking => {
                let (prev, current) = walk.last_two();
                let sorted = sort_by_turn(&current, &(current - prev), graph.neighbors(&current))?;
                let next = sorted.into_iter().find(|n| !walk.is_visited(&n.point));
                walk.advance(next)?;
                WalkState::CheckDone
            }
            WalkState::CheckDone => {
                let (_, current) = walk.last_two();
                let closing = graph
                    .neighbors(&current)
                    .into_iter()
                    .find(|n| graph.is_same_node(&n.point, &start));
                match closing {
                    Some(n) => {
                        trace!(segment = n.segment, "cycle closed");
                        walk.segments.push(n.segment);
                        WalkState::Terminal
                    }
                    None => WalkState::Walking,
                }
            }
            WalkState::Terminal => WalkState::Terminal,
        };
    }

    Ok(Outline {
        points: walk.points,
        segments: walk.segments,
    })
}

struct Walk<'g> {
    graph: &'g SegmentGraph,
    points: Vec<Point3>,
    segments: Vec<usize>,
    max_steps: usize,
}

impl Walk<'_> {
    fn last_two(&self) -> (Point3, Point3) {
        let n = self.points.len();
        (self.points[n.saturating_sub(2)], self.points[n - 1])
    }

    fn is_visited(&self, p: &Point3) -> bool {
        min_distance(p, &self.points).is_some_and(|d| d <= self.graph.tolerance())
    }

    fn advance(&mut self, next: Option<Neighbor>) -> Result<()> {
        let step = self.segments.len();
        let Some(next) = next else {
            let (_, current) = self.last_two();
            return Err(GraphError::Disconnected {
                x: current.x,
                y: current.y,
                step,
            }
            .into());
        };
        if step >= self.max_steps {
            return Err(GraphError::IterationLimit {
                limit: self.max_steps,
            }
            .into());
        }
        trace!(step, x = next.point.x, y = next.point.y, segment = next.segment, "walk step");
        self.points.push(next.point);
        self.segments.push(next.segment);
        Ok(())
    }
}
