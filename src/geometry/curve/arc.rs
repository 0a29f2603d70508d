use std::f64::consts::{PI, TAU};

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// Upper bound on the chord count produced by [`Curve::to_polyline`].
const MAX_CHORDS: u32 = 1024;

/// A circular arc in 3D space.
///
/// Defined by a center, radius, normal axis, and a reference direction
/// for the zero-angle. The parametric form sweeps counter-clockwise about
/// the normal from `start_angle` to `end_angle` (in radians).
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    center: Point3,
    radius: f64,
    normal: Vector3,
    ref_dir: Vector3,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle
    /// * `radius` - Radius (must be positive)
    /// * `normal` - Normal vector defining the arc plane
    /// * `ref_dir` - Reference direction for angle = 0 (must be perpendicular to normal)
    /// * `start_angle` - Start angle in radians
    /// * `end_angle` - End angle in radians, greater than `start_angle` by at most 2π
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive, the normal is zero-length,
    /// the reference direction is not perpendicular to the normal, or the
    /// sweep is empty or exceeds a full turn.
    pub fn new(
        center: Point3,
        radius: f64,
        normal: Vector3,
        ref_dir: Vector3,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }

        let normal_len = normal.norm();
        if normal_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / normal_len;

        let ref_len = ref_dir.norm();
        if ref_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let ref_dir = ref_dir / ref_len;

        if normal.dot(&ref_dir).abs() > TOLERANCE {
            return Err(GeometryError::Degenerate(
                "reference direction must be perpendicular to normal".into(),
            )
            .into());
        }

        let sweep = end_angle - start_angle;
        if sweep < TOLERANCE || sweep > TAU + TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "arc sweep {sweep} must be in (0, 2π]"
            ))
            .into());
        }

        Ok(Self {
            center,
            radius,
            normal,
            ref_dir,
            start_angle,
            end_angle,
        })
    }

    /// Creates a counter-clockwise arc in the XY plane with angles measured
    /// from the +X axis.
    ///
    /// # Errors
    ///
    /// See [`Arc::new`].
    pub fn in_xy(center: Point3, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self> {
        Self::new(center, radius, Vector3::z(), Vector3::x(), start_angle, end_angle)
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the normal vector of the arc plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Computes the second axis direction (perpendicular to both normal and `ref_dir`).
    fn binormal(&self) -> Vector3 {
        self.normal.cross(&self.ref_dir)
    }

    fn point_at_angle(&self, t: f64) -> Point3 {
        let (sin, cos) = t.sin_cos();
        self.center + self.ref_dir * (self.radius * cos) + self.binormal() * (self.radius * sin)
    }
}

impl Curve for Arc {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        self.domain().check("t", t)?;
        Ok(self.point_at_angle(t))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(self.start_angle, self.end_angle)
    }

    fn closest_parameter(&self, point: &Point3) -> f64 {
        let to_point = point - self.center;
        let in_plane = to_point - self.normal * to_point.dot(&self.normal);
        if in_plane.norm() < TOLERANCE {
            // Every point of the arc is equidistant from its center.
            return self.start_angle;
        }

        let angle = in_plane.dot(&self.binormal()).atan2(in_plane.dot(&self.ref_dir));
        let mut t = (angle - self.start_angle).rem_euclid(TAU) + self.start_angle;
        if t <= self.end_angle {
            return t;
        }

        // Outside the sweep: pick whichever end is angularly nearer.
        let past_end = t - self.end_angle;
        t -= TAU;
        let before_start = self.start_angle - t;
        if past_end <= before_start {
            self.end_angle
        } else {
            self.start_angle
        }
    }

    fn trim(&self, t0: f64, t1: f64) -> Result<Self> {
        self.domain().check_interval(t0, t1)?;
        Ok(Self {
            start_angle: t0,
            end_angle: t1,
            ..self.clone()
        })
    }

    fn start_point(&self) -> Point3 {
        self.point_at_angle(self.start_angle)
    }

    fn end_point(&self) -> Point3 {
        self.point_at_angle(self.end_angle)
    }

    fn to_polyline(&self, tolerance: f64) -> Vec<Point3> {
        let sweep = self.end_angle - self.start_angle;
        let n = chord_count(self.radius, sweep, tolerance);
        (0..=n)
            .map(|i| {
                let frac = f64::from(i) / f64::from(n);
                self.point_at_angle(self.start_angle + sweep * frac)
            })
            .collect()
    }

    fn is_closed(&self) -> bool {
        (self.end_angle - self.start_angle - TAU).abs() < TOLERANCE
    }
}

/// Number of chords needed so the sagitta stays within `tolerance`.
fn chord_count(radius: f64, sweep: f64, tolerance: f64) -> u32 {
    if tolerance <= 0.0 {
        return MAX_CHORDS;
    }
    // sagitta = r * (1 - cos(θ/2))  =>  θ = 2 * acos(1 - tolerance / r)
    let max_angle = if tolerance >= radius {
        PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (sweep / max_angle).ceil() as u32;
    n.clamp(1, MAX_CHORDS)
}
