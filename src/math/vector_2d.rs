use std::f64::consts::FRAC_PI_2;

use crate::error::{GeometryError, Result};

use super::{Point2, Vector2, TOLERANCE};

/// Returns the unit vector pointing from `from` toward `to`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if the two points coincide.
pub fn unit_vector(from: &Point2, to: &Point2) -> Result<Vector2> {
    let d = distance(from, to);
    if d < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(Vector2::new((to.x - from.x) / d, (to.y - from.y) / d))
}

/// Rotates `vector` by `angle` radians. Positive angles turn counter-clockwise.
#[must_use]
pub fn rotate(vector: &Vector2, angle: f64) -> Vector2 {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(
        vector.x * cos - vector.y * sin,
        vector.x * sin + vector.y * cos,
    )
}

/// Returns `vector` turned a quarter turn counter-clockwise.
#[must_use]
pub fn perpendicular(vector: &Vector2) -> Vector2 {
    rotate(vector, FRAC_PI_2)
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(p1: &Point2, p2: &Point2) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}
