use super::{Point3, Vector3, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Normalizes `v` to unit length.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `v` is shorter than [`TOLERANCE`].
pub fn unitize(v: &Vector3) -> Result<Vector3> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}

/// Unsigned angle between two vectors, in `[0, π]`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if either vector is zero-length.
pub fn vector_angle(a: &Vector3, b: &Vector3) -> Result<f64> {
    let a = unitize(a)?;
    let b = unitize(b)?;
    Ok(a.dot(&b).clamp(-1.0, 1.0).acos())
}

/// Z component of `a × b`: positive when `b` lies counter-clockwise of `a`
/// in the XY plane.
#[must_use]
pub fn cross_z(a: &Vector3, b: &Vector3) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Rotates `v` about the Z axis by `angle` radians. The result lies in the
/// XY plane.
#[must_use]
pub fn rotate_xy(v: &Vector3, angle: f64) -> Vector3 {
    let (sin, cos) = angle.sin_cos();
    Vector3::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y, 0.0)
}

/// Rotates `target` about `pivot` by `angle` and moves it to exactly
/// `distance` from `pivot`.
///
/// Only the direction of `target - pivot` survives; its length is discarded
/// before rescaling. The returned point keeps the pivot's Z.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `target` coincides with `pivot`
/// in the XY plane.
pub fn rotate_and_scale(pivot: &Point3, target: &Point3, angle: f64, distance: f64) -> Result<Point3> {
    let rotated = rotate_xy(&(target - pivot), angle);
    let dir = unitize(&rotated)?;
    Ok(Point3::new(
        pivot.x + dir.x * distance,
        pivot.y + dir.y * distance,
        pivot.z,
    ))
}

/// Signed polar angle of `v` measured from `axis`, in `[-π, π]`.
///
/// The unsigned angle is negated when `v` lies counter-clockwise of `axis`,
/// so sorting ascending puts the sharpest left turn first.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if either vector is zero-length.
pub fn signed_polar_angle(axis: &Vector3, v: &Vector3) -> Result<f64> {
    let angle = vector_angle(axis, v)?;
    if cross_z(axis, v) > 0.0 {
        Ok(-angle)
    } else {
        Ok(angle)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn vector_angle_right_angle() {
        let a = Vector3::new(2.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 5.0, 0.0);
        assert_abs_diff_eq!(vector_angle(&a, &b).unwrap(), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn vector_angle_opposite() {
        let a = Vector3::new(1.0, 1.0, 0.0);
        let b = Vector3::new(-3.0, -3.0, 0.0);
        assert_abs_diff_eq!(vector_angle(&a, &b).unwrap(), PI, epsilon = 1e-7);
    }

    #[test]
    fn vector_angle_zero_vector() {
        let err = vector_angle(&Vector3::zeros(), &Vector3::x()).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn rotate_and_scale_discards_length() {
        let pivot = Point3::new(1.0, 1.0, 0.0);
        let target = Point3::new(101.0, 1.0, 0.0);
        let p = rotate_and_scale(&pivot, &target, FRAC_PI_2, 2.0).unwrap();
        assert_abs_diff_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn rotate_and_scale_negative_angle() {
        let pivot = Point3::origin();
        let target = Point3::new(0.0, 4.0, 0.0);
        let p = rotate_and_scale(&pivot, &target, -FRAC_PI_2, 1.5).unwrap();
        assert_abs_diff_eq!(p.x, 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rotate_and_scale_keeps_pivot_z() {
        let pivot = Point3::new(0.0, 0.0, 7.0);
        let target = Point3::new(1.0, 0.0, 7.0);
        let p = rotate_and_scale(&pivot, &target, FRAC_PI_2, 1.0).unwrap();
        assert_abs_diff_eq!(p.z, 7.0, epsilon = 1e-12);
    }

    #[test]
    fn rotate_and_scale_coincident_points() {
        let p = Point3::new(3.0, 3.0, 0.0);
        assert!(rotate_and_scale(&p, &p, FRAC_PI_2, 1.0).is_err());
    }

    #[test]
    fn signed_polar_angle_left_is_negative() {
        let axis = Vector3::x();
        let left = signed_polar_angle(&axis, &Vector3::new(0.0, 1.0, 0.0)).unwrap();
        let right = signed_polar_angle(&axis, &Vector3::new(0.0, -1.0, 0.0)).unwrap();
        assert_abs_diff_eq!(left, -FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(right, FRAC_PI_2, epsilon = 1e-12);
    }
}
