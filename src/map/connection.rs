use crate::geometry::segment::PathSegment;

use super::node::NodeId;

slotmap::new_key_type! {
    /// Unique identifier for a connection in the route map.
    pub struct ConnectionId;
}

/// A route between two nodes, made of chained path segments.
///
/// Each segment is expected to start where the previous one ends; this is
/// a convention, see [`crate::operations::query::IsChained`].
#[derive(Debug, Clone, PartialEq)]
pub struct NodeConnection {
    /// Node the route leaves from.
    pub from: NodeId,
    /// Node the route arrives at.
    pub to: NodeId,
    /// The physical route, in travel order.
    pub segments: Vec<PathSegment>,
    /// Whether the route may also be travelled from `to` to `from`.
    pub is_two_way: bool,
}

impl NodeConnection {
    /// Creates a connection with no segments.
    #[must_use]
    pub fn new(from: NodeId, to: NodeId, is_two_way: bool) -> Self {
        Self {
            from,
            to,
            segments: Vec::new(),
            is_two_way,
        }
    }

    /// Sets the segment sequence.
    #[must_use]
    pub fn with_segments(mut self, segments: Vec<PathSegment>) -> Self {
        self.segments = segments;
        self
    }

    /// Returns the last segment, the one a new segment would continue.
    #[must_use]
    pub fn last_segment(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Appends a segment to the route.
    pub fn push_segment(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Returns `true` if the connection touches `node`.
    #[must_use]
    pub fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }

    /// Returns the node reached when leaving `node` along this connection.
    #[must_use]
    pub fn leads_from(&self, node: NodeId) -> Option<NodeId> {
        if self.from == node {
            Some(self.to)
        } else if self.is_two_way && self.to == node {
            Some(self.from)
        } else {
            None
        }
    }
}
