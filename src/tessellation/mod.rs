mod tessellate_connection;
mod tessellate_segment;

pub use tessellate_connection::TessellateConnection;
pub use tessellate_segment::TessellateSegment;

use crate::error::{Result, TessellationError};
use crate::math::Point2;

/// Parameters controlling how finely arcs are sampled for display.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Maximum allowed deviation from the true arc.
    pub tolerance: f64,
    /// Minimum number of segments per arc.
    pub min_segments: u32,
    /// Maximum number of segments per arc.
    pub max_segments: u32,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            min_segments: 4,
            max_segments: 256,
        }
    }
}

impl TessellationParams {
    fn validate(&self) -> Result<()> {
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(TessellationError::InvalidParameters(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            ))
            .into());
        }
        if self.min_segments == 0 || self.min_segments > self.max_segments {
            return Err(TessellationError::InvalidParameters(format!(
                "segment bounds must satisfy 1 <= min <= max, got {}..{}",
                self.min_segments, self.max_segments
            ))
            .into());
        }
        Ok(())
    }
}

/// A polyline approximation of a route.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}
