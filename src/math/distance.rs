use super::{Point3, TOLERANCE};

/// Projects `point` onto the segment `a → b`.
///
/// Returns the clamped segment parameter in `[0, 1]` and the foot point.
/// A zero-length segment projects everything onto `a`.
#[must_use]
pub fn closest_on_segment(point: &Point3, a: &Point3, b: &Point3) -> (f64, Point3) {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return (0.0, *a);
    }
    let t = ((point - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    (t, a + d * t)
}

/// Smallest distance from `target` to any of `points`, or `None` when
/// `points` is empty.
#[must_use]
pub fn min_distance(target: &Point3, points: &[Point3]) -> Option<f64> {
    points
        .iter()
        .map(|p| nalgebra::distance(target, p))
        .min_by(f64::total_cmp)
}

/// Appends `p` unless a point within `tol` is already present.
pub fn push_unique(points: &mut Vec<Point3>, p: Point3, tol: f64) {
    if min_distance(&p, points).is_none_or(|d| d >= tol) {
        points.push(p);
    }
}
