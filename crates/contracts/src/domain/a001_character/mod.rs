pub mod aggregate;
pub mod field_map;

pub use aggregate::*;
pub use field_map::*;
