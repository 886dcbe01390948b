use std::collections::BTreeSet;

use crate::math::Point2;

use super::command::Command;

slotmap::new_key_type! {
    /// Unique identifier for a node in the route map.
    pub struct NodeId;
}

/// Traffic classification of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PointType {
    PrimaryTraffic,
    SecondaryTraffic,
    TertiaryTraffic,
    TrafficCheckOut,
}

/// A navigable point of the route map.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Location of the node.
    pub position: Point2,
    /// Polygon outlining the node's area, in order.
    pub area: Vec<Point2>,
    /// Commands executed at this node, in order.
    pub commands: Vec<Command>,
    /// Traffic classifications of this node.
    pub point_types: BTreeSet<PointType>,
}

impl Node {
    /// Creates a node at the given position with no area, commands or types.
    #[must_use]
    pub fn new(position: Point2) -> Self {
        Self {
            position,
            area: Vec::new(),
            commands: Vec::new(),
            point_types: BTreeSet::new(),
        }
    }

    /// Sets the area polygon.
    #[must_use]
    pub fn with_area(mut self, area: Vec<Point2>) -> Self {
        self.area = area;
        self
    }

    /// Appends a command.
    #[must_use]
    pub fn with_command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    /// Adds a traffic classification.
    #[must_use]
    pub fn with_point_type(mut self, point_type: PointType) -> Self {
        self.point_types.insert(point_type);
        self
    }
}
