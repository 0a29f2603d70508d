use crate::error::{GeometryError, PolytraceError, Result};
use crate::math::angle_2d::signed_polar_angle;
use crate::math::{Point3, Vector3};

use super::graph::Neighbor;

/// A neighbor expressed in polar form around a node.
#[derive(Debug, Clone, Copy)]
struct PolarCoordinate {
    neighbor: Neighbor,
    angle: f64,
}

/// Orders `candidates` around `origin` by signed angle from `axis`, most
/// counter-clockwise first.
///
/// The sort is stable, so candidates at equal angles keep segment order. A
/// single candidate is returned untouched.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the axis is zero-length or a
/// candidate coincides with `origin`.
pub fn sort_by_turn(
    origin: &Point3,
    axis: &Vector3,
    candidates: Vec<Neighbor>,
) -> Result<Vec<Neighbor>> {
    if candidates.len() < 2 {
        return Ok(candidates);
    }

    let mut polar = candidates
        .into_iter()
        .map(|neighbor| -> Result<PolarCoordinate> {
            let angle = signed_polar_angle(axis, &(neighbor.point - origin))
                .map_err(|e| degenerate_at(e, origin))?;
            Ok(PolarCoordinate { neighbor, angle })
        })
        .collect::<Result<Vec<_>>>()?;

    polar.sort_by(|a, b| a.angle.total_cmp(&b.angle));
    Ok(polar.into_iter().map(|pc| pc.neighbor).collect())
}

fn degenerate_at(err: PolytraceError, origin: &Point3) -> PolytraceError {
    match err {
        PolytraceError::Geometry(GeometryError::ZeroVector) => GeometryError::Degenerate(format!(
            "zero-length direction at node ({}, {})",
            origin.x, origin.y
        ))
        .into(),
        other => other,
    }
}
