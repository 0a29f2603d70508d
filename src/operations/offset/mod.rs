mod point_offset;

pub use point_offset::{offset, OffsetSide, PointOffset2D};
