use tracing::debug;

use crate::error::{PathError, Result};
use crate::geometry::segment::ArcSegment;
use crate::map::{ConnectionId, RouteMap};

use super::TangentArc;

/// Appends a tangent arc to the end of a stored connection.
pub struct ExtendConnection {
    connection: ConnectionId,
    arc: TangentArc,
}

impl ExtendConnection {
    /// Creates a new `ExtendConnection` operation.
    #[must_use]
    pub fn new(connection: ConnectionId, arc: TangentArc) -> Self {
        Self { connection, arc }
    }

    /// Executes the operation, returning the arc that was appended.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::UnsupportedPredecessor`] if the connection has no
    /// segment to continue from, or any error of [`TangentArc::execute`].
    /// The connection is left untouched on error.
    pub fn execute(&self, map: &mut RouteMap) -> Result<ArcSegment> {
        let previous = *map
            .connection(self.connection)?
            .last_segment()
            .ok_or(PathError::UnsupportedPredecessor)?;
        let arc = self.arc.execute(&previous)?;

        let connection = map.connection_mut(self.connection)?;
        connection.push_segment(arc.into());
        debug!("Connection now has {} segments", connection.segments.len());
        Ok(arc)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::{GeometryError, RouteError};
    use crate::geometry::segment::{PathSegment, StraightSegment};
    use crate::map::{Node, NodeConnection};
    use crate::math::Point2;

    fn map_with_connection(segments: Vec<PathSegment>) -> (RouteMap, ConnectionId) {
        let mut map = RouteMap::new();
        let a = map.add_node(Node::new(Point2::new(0.0, 0.0)));
        let b = map.add_node(Node::new(Point2::new(15.0, -5.0)));
        let id = map
            .add_connection(NodeConnection::new(a, b, false).with_segments(segments))
            .unwrap();
        (map, id)
    }

    #[test]
    fn appends_arc_after_straight() {
        let straight = StraightSegment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        let (mut map, id) = map_with_connection(vec![straight.into()]);

        let arc = ExtendConnection::new(id, TangentArc::new(5.0, 90.0, false))
            .execute(&mut map)
            .unwrap();

        let connection = map.connection(id).unwrap();
        assert_eq!(connection.segments.len(), 2);
        assert_eq!(connection.last_segment(), Some(&PathSegment::Arc(arc)));
        assert_abs_diff_eq!(arc.end, Point2::new(15.0, -5.0), epsilon = 1e-9);
    }

    #[test]
    fn chains_from_the_last_segment() {
        let straight = StraightSegment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        let (mut map, id) = map_with_connection(vec![straight.into()]);

        let first = ExtendConnection::new(id, TangentArc::new(5.0, 90.0, false))
            .execute(&mut map)
            .unwrap();
        let second = ExtendConnection::new(id, TangentArc::new(5.0, 90.0, true))
            .execute(&mut map)
            .unwrap();

        assert_eq!(second.start, first.end);
        assert_eq!(map.connection(id).unwrap().segments.len(), 3);
    }

    #[test]
    fn empty_connection_has_no_predecessor() {
        let (mut map, id) = map_with_connection(Vec::new());
        let result = ExtendConnection::new(id, TangentArc::new(5.0, 90.0, true)).execute(&mut map);
        assert!(matches!(
            result,
            Err(RouteError::Path(PathError::UnsupportedPredecessor))
        ));
        assert!(map.connection(id).unwrap().segments.is_empty());
    }

    #[test]
    fn rejected_arc_leaves_connection_untouched() {
        let straight = StraightSegment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        let (mut map, id) = map_with_connection(vec![straight.into()]);

        let result = ExtendConnection::new(id, TangentArc::new(-1.0, 90.0, true)).execute(&mut map);
        assert!(matches!(
            result,
            Err(RouteError::Geometry(GeometryError::ParameterOutOfRange { .. }))
        ));
        assert_eq!(map.connection(id).unwrap().segments.len(), 1);
    }

    #[test]
    fn missing_connection_is_reported() {
        let (mut map, id) = map_with_connection(Vec::new());
        map.remove_connection(id).unwrap();
        let result = ExtendConnection::new(id, TangentArc::new(5.0, 90.0, true)).execute(&mut map);
        assert!(matches!(result, Err(RouteError::Map(_))));
    }
}
