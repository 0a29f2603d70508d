pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use config::Tolerances;
pub use error::{PolytraceError, Result};
pub use operations::modification::SplitAtPoints;
pub use operations::offset::{offset, OffsetSide, PointOffset2D};
pub use operations::outline::{trace, Outline, OutlineFromCurves, TraceOutline};
pub use operations::query::{CutExtents, CutParameters};
