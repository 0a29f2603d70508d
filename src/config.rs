//! Distance and angle thresholds shared by segmentation, tracing and offset.
//!
//! The defaults suit drawings in millimetres. Callers working at another
//! scale should pass a [`Tolerances::scaled`] copy instead of editing
//! individual fields.

use std::f64::consts::PI;

use crate::error::{OperationError, Result};

/// Distance below which two graph nodes are the same node.
pub const DEFAULT_NODE_TOLERANCE: f64 = 0.5;

/// Maximum distance between a point and its projection for the point to
/// count as lying on a curve.
pub const DEFAULT_ON_CURVE_TOLERANCE: f64 = 0.1;

/// Turn angle (radians) below which three points are treated as collinear.
pub const DEFAULT_COLLINEAR_ANGLE: f64 = PI / 180.0;

/// Tolerance configuration threaded through the graph and segmentation
/// components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Coincidence distance for segment-graph nodes.
    pub node: f64,
    /// Acceptance distance for points projected onto curves.
    pub on_curve: f64,
    /// Collinearity threshold of the CCW test, in radians.
    pub collinear_angle: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            node: DEFAULT_NODE_TOLERANCE,
            on_curve: DEFAULT_ON_CURVE_TOLERANCE,
            collinear_angle: DEFAULT_COLLINEAR_ANGLE,
        }
    }
}

impl Tolerances {
    /// Sets the node coincidence distance.
    #[must_use]
    pub fn with_node(mut self, node: f64) -> Self {
        self.node = node;
        self
    }

    /// Sets the on-curve acceptance distance.
    #[must_use]
    pub fn with_on_curve(mut self, on_curve: f64) -> Self {
        self.on_curve = on_curve;
        self
    }

    /// Sets the collinear angle threshold (radians).
    #[must_use]
    pub fn with_collinear_angle(mut self, collinear_angle: f64) -> Self {
        self.collinear_angle = collinear_angle;
        self
    }

    /// Scales the distance tolerances by `factor`. Angles are unitless and
    /// stay unchanged.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            node: self.node * factor,
            on_curve: self.on_curve * factor,
            collinear_angle: self.collinear_angle,
        }
    }

    /// Checks that every threshold is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("node", self.node),
            ("on_curve", self.on_curve),
            ("collinear_angle", self.collinear_angle),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(OperationError::InvalidInput(format!(
                    "tolerance `{name}` must be finite and positive, got {value}"
                ))
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds() {
        let tol = Tolerances::default();
        assert!((tol.node - 0.5).abs() < 1e-12);
        assert!((tol.on_curve - 0.1).abs() < 1e-12);
        assert!((tol.collinear_angle - PI / 180.0).abs() < 1e-12);
        tol.validate().unwrap();
    }

    #[test]
    fn scaled_keeps_angle() {
        let tol = Tolerances::default().scaled(10.0);
        assert!((tol.node - 5.0).abs() < 1e-12);
        assert!((tol.on_curve - 1.0).abs() < 1e-12);
        assert!((tol.collinear_angle - DEFAULT_COLLINEAR_ANGLE).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive() {
        let err = Tolerances::default().with_node(0.0).validate().unwrap_err();
        assert!(err.is_invalid_input());
        assert!(Tolerances::default()
            .with_on_curve(f64::NAN)
            .validate()
            .is_err());
    }
}
