use super::angle_2d::{cross_z, vector_angle};
use super::Point3;
use crate::error::Result;

/// Computes the signed area of a polygon in the XY plane (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Tests whether the path `p1 → p2 → p3` turns counter-clockwise at `p2`.
///
/// A turn smaller than `collinear_angle` (radians) counts as
/// counter-clockwise, so near-collinear triples never flip on the sign of a
/// vanishing cross product. The result is invariant under uniform scaling.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `p1 == p2` or `p2 == p3`.
pub fn is_ccw_turn(p1: &Point3, p2: &Point3, p3: &Point3, collinear_angle: f64) -> Result<bool> {
    let incoming = p2 - p1;
    let outgoing = p3 - p2;
    if vector_angle(&incoming, &outgoing)? < collinear_angle {
        return Ok(true);
    }
    Ok(cross_z(&incoming, &outgoing) > 0.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert!((signed_area_2d(&pts) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert!((signed_area_2d(&pts) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[p(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn left_turn_is_ccw() {
        assert!(is_ccw_turn(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0), PI / 180.0).unwrap());
    }

    #[test]
    fn right_turn_is_not_ccw() {
        assert!(!is_ccw_turn(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, -1.0), PI / 180.0).unwrap());
    }

    #[test]
    fn slight_right_turn_below_threshold_is_ccw() {
        // ~0.3 degree clockwise deviation.
        assert!(is_ccw_turn(&p(0.0, 0.0), &p(10.0, 0.0), &p(20.0, -0.05), PI / 180.0).unwrap());
        // Same triple with a zero threshold falls back to the cross sign.
        assert!(!is_ccw_turn(&p(0.0, 0.0), &p(10.0, 0.0), &p(20.0, -0.05), 0.0).unwrap());
    }

    #[test]
    fn ccw_turn_scale_invariant() {
        let triples = [
            (p(0.0, 0.0), p(3.0, 1.0), p(2.0, 5.0)),
            (p(1.0, 1.0), p(4.0, 0.5), p(6.0, -3.0)),
            (p(0.0, 0.0), p(10.0, 0.0), p(20.0, -0.05)),
        ];
        for (a, b, c) in &triples {
            let base = is_ccw_turn(a, b, c, PI / 180.0).unwrap();
            for scale in [1e-3, 0.5, 7.0, 1e4] {
                let s = |q: &Point3| Point3::new(q.x * scale, q.y * scale, 0.0);
                assert_eq!(is_ccw_turn(&s(a), &s(b), &s(c), PI / 180.0).unwrap(), base);
            }
        }
    }

    #[test]
    fn ccw_turn_coincident_points() {
        let err = is_ccw_turn(&p(1.0, 1.0), &p(1.0, 1.0), &p(2.0, 0.0), PI / 180.0).unwrap_err();
        assert!(err.is_degenerate());
    }
}
