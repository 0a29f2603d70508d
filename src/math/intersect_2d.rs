use super::angle_2d::cross_z;
use super::distance::push_unique;
use super::{Point3, TOLERANCE};

/// A crossing of two bounded segments in the XY plane.
#[derive(Debug, Clone, Copy)]
pub struct SegmentCrossing {
    /// The crossing point (Z taken from the first segment).
    pub point: Point3,
    /// Parameter on the first segment, in `[0, 1]`.
    pub t: f64,
    /// Parameter on the second segment, in `[0, 1]`.
    pub u: f64,
}

/// Bounded segment-segment intersection in 2D.
///
/// Endpoint touches count as crossings. Parallel and collinear segments
/// report no crossing here; see [`collinear_contacts_2d`].
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point3,
    a1: &Point3,
    b0: &Point3,
    b1: &Point3,
) -> Option<SegmentCrossing> {
    let da = a1 - a0;
    let db = b1 - b0;
    let denom = cross_z(&da, &db);
    if denom.abs() < TOLERANCE {
        return None;
    }

    let offset = b0 - a0;
    let t = cross_z(&offset, &db) / denom;
    let u = cross_z(&offset, &da) / denom;

    let eps = TOLERANCE;
    if !(-eps..=1.0 + eps).contains(&t) || !(-eps..=1.0 + eps).contains(&u) {
        return None;
    }
    let t = t.clamp(0.0, 1.0);
    let u = u.clamp(0.0, 1.0);
    let point = Point3::new(a0.x + da.x * t, a0.y + da.y * t, a0.z);
    Some(SegmentCrossing { point, t, u })
}

/// Contact points of two collinear segments in the XY plane.
///
/// Every endpoint of either segment that lies within the other is reported
/// once: an end-to-end touch gives one point, an overlap gives the two ends
/// of the shared span. Segments that are not collinear give nothing.
#[must_use]
pub fn collinear_contacts_2d(a0: &Point3, a1: &Point3, b0: &Point3, b1: &Point3) -> Vec<Point3> {
    let da = a1 - a0;
    let db = b1 - b0;
    let len_a = da.xy().norm();
    let len_b = db.xy().norm();
    if len_a < TOLERANCE || len_b < TOLERANCE {
        return Vec::new();
    }
    if cross_z(&da, &db).abs() >= TOLERANCE * len_a * len_b {
        return Vec::new();
    }
    // Distance of b0 from the carrier line of a.
    if (cross_z(&(b0 - a0), &da) / len_a).abs() >= TOLERANCE {
        return Vec::new();
    }

    let mut contacts = Vec::new();
    for (p, s0, s1) in [(b0, a0, a1), (b1, a0, a1), (a0, b0, b1), (a1, b0, b1)] {
        if lies_within(p, s0, s1) {
            push_unique(&mut contacts, *p, TOLERANCE);
        }
    }
    contacts
}

/// Whether `p`, known to be on the carrier line, projects inside `s0 → s1`.
fn lies_within(p: &Point3, s0: &Point3, s1: &Point3) -> bool {
    let d = (s1 - s0).xy();
    let t = (p - s0).xy().dot(&d) / d.norm_squared();
    let eps = TOLERANCE / d.norm();
    (-eps..=1.0 + eps).contains(&t)
}
