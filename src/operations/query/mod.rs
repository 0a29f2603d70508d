mod cut_extents;
mod cut_parameters;
mod intersect;

pub use cut_extents::CutExtents;
pub use cut_parameters::CutParameters;
pub use intersect::{CurveCurveIntersect, NetworkCutPoints};
