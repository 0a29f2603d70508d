pub mod modification;
pub mod offset;
pub mod outline;
pub mod query;
