use crate::error::Result;
use crate::math::vector_2d::{distance, unit_vector};
use crate::math::{Point2, Vector2};

/// A straight path segment between two map coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StraightSegment {
    /// Where travel along the segment begins.
    pub start: Point2,
    /// Where travel along the segment ends.
    pub end: Point2,
}

impl StraightSegment {
    /// Creates a new straight segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the unit direction of travel.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment has zero length.
    pub fn direction(&self) -> Result<Vector2> {
        unit_vector(&self.start, &self.end)
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        distance(&self.start, &self.end)
    }
}
