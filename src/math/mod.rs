pub mod arc_2d;
pub mod vector_2d;

/// 2D point type. Map coordinates use a right-handed frame with y pointing up.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
