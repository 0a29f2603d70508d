mod split;

pub use split::SplitAtPoints;
