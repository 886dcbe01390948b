use crate::error::Result;
use crate::map::{ConnectionId, RouteMap};

use super::tessellate_segment::TessellateSegment;
use super::{Polyline, TessellationParams};

/// Tessellates every segment of a connection into one polyline.
pub struct TessellateConnection {
    connection: ConnectionId,
    params: TessellationParams,
}

impl TessellateConnection {
    /// Creates a new `TessellateConnection` operation.
    #[must_use]
    pub fn new(connection: ConnectionId, params: TessellationParams) -> Self {
        Self { connection, params }
    }

    /// Executes the tessellation.
    ///
    /// Each segment contributes its points after the first, so chained
    /// segments do not repeat their shared junction point.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection is not found or the parameters
    /// are invalid.
    pub fn execute(&self, map: &RouteMap) -> Result<Polyline> {
        self.params.validate()?;
        let connection = map.connection(self.connection)?;
        let mut points = Vec::new();
        for segment in &connection.segments {
            if points.is_empty() {
                points.push(segment.start());
            }
            TessellateSegment::new(*segment, self.params).append_to(&mut points);
        }
        Ok(Polyline { points })
    }
}
