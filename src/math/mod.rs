pub mod angle_2d;
pub mod distance;
pub mod intersect_2d;
pub mod polygon_2d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Numeric tolerance for floating-point comparisons.
///
/// This is not a modelling tolerance: coincidence of graph nodes and
/// on-curve tests use [`crate::config::Tolerances`].
pub const TOLERANCE: f64 = 1e-10;
