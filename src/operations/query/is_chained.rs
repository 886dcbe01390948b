use crate::error::Result;
use crate::map::{ConnectionId, RouteMap};
use crate::math::vector_2d::distance;
use crate::math::TOLERANCE;

/// Checks that each segment of a connection starts where the previous one ends.
pub struct IsChained {
    connection: ConnectionId,
    tolerance: f64,
}

impl IsChained {
    /// Creates a new `IsChained` query using [`TOLERANCE`].
    #[must_use]
    pub fn new(connection: ConnectionId) -> Self {
        Self {
            connection,
            tolerance: TOLERANCE,
        }
    }

    /// Overrides the allowed gap between consecutive segments.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the query. Connections with fewer than two segments are chained.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection is not found.
    pub fn execute(&self, map: &RouteMap) -> Result<bool> {
        let connection = map.connection(self.connection)?;
        Ok(connection
            .segments
            .windows(2)
            .all(|pair| distance(&pair[0].end(), &pair[1].start()) <= self.tolerance))
    }
}
