pub mod error;
pub mod geometry;
pub mod map;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{Result, RouteError};
