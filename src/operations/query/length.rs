use crate::error::Result;
use crate::geometry::segment::PathSegment;
use crate::map::{ConnectionId, RouteMap};

/// Computes the travel length of a connection.
pub struct Length {
    connection: ConnectionId,
}

impl Length {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(connection: ConnectionId) -> Self {
        Self { connection }
    }

    /// Executes the query, returning the summed length of all segments.
    ///
    /// A straight contributes its endpoint distance, an arc contributes
    /// `radius * |sweep|`.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection is not found.
    pub fn execute(&self, map: &RouteMap) -> Result<f64> {
        let connection = map.connection(self.connection)?;
        Ok(connection.segments.iter().map(PathSegment::length).sum())
    }
}
