pub mod segment;

pub use segment::{ArcSegment, PathSegment, StraightSegment};
