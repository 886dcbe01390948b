mod arc;
mod straight;

pub use arc::ArcSegment;
pub use straight::StraightSegment;

use crate::error::Result;
use crate::math::{Point2, Vector2};

/// A single piece of the physical route between two nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// A straight segment.
    Straight(StraightSegment),
    /// A circular arc.
    Arc(ArcSegment),
}

impl PathSegment {
    /// Returns the starting coordinate.
    #[must_use]
    pub fn start(&self) -> Point2 {
        match self {
            Self::Straight(s) => s.start,
            Self::Arc(a) => a.start,
        }
    }

    /// Returns the ending coordinate.
    #[must_use]
    pub fn end(&self) -> Point2 {
        match self {
            Self::Straight(s) => s.end,
            Self::Arc(a) => a.end,
        }
    }

    /// Unit direction of travel at the starting coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment is degenerate (zero length or zero radius).
    pub fn start_heading(&self) -> Result<Vector2> {
        match self {
            Self::Straight(s) => s.direction(),
            Self::Arc(a) => a.start_heading(),
        }
    }

    /// Unit direction of travel at the ending coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment is degenerate (zero length or zero radius).
    pub fn end_heading(&self) -> Result<Vector2> {
        match self {
            Self::Straight(s) => s.direction(),
            Self::Arc(a) => a.end_heading(),
        }
    }

    /// Length of travel along the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Self::Straight(s) => s.length(),
            Self::Arc(a) => a.length(),
        }
    }

    /// Returns the arc payload, if this is an arc.
    #[must_use]
    pub fn as_arc(&self) -> Option<&ArcSegment> {
        match self {
            Self::Arc(a) => Some(a),
            Self::Straight(_) => None,
        }
    }
}

impl From<StraightSegment> for PathSegment {
    fn from(segment: StraightSegment) -> Self {
        Self::Straight(segment)
    }
}

impl From<ArcSegment> for PathSegment {
    fn from(segment: ArcSegment) -> Self {
        Self::Arc(segment)
    }
}
