mod command;
mod connection;
mod node;

pub use command::Command;
pub use connection::{ConnectionId, NodeConnection};
pub use node::{Node, NodeId, PointType};

use slotmap::SlotMap;
use tracing::debug;

use crate::error::MapError;

/// Central arena that owns every node and connection of a route map.
///
/// Connections refer to nodes by [`NodeId`] and never own them. Removing a
/// node removes the connections that touch it, so no connection dangles.
#[derive(Debug, Default)]
pub struct RouteMap {
    nodes: SlotMap<NodeId, Node>,
    connections: SlotMap<ConnectionId, NodeConnection>,
}

impl RouteMap {
    /// Creates a new, empty route map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Node operations ---

    /// Inserts a node and returns its ID.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        self.nodes.insert(node)
    }

    /// Returns a reference to the node, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in the map.
    pub fn node(&self, id: NodeId) -> Result<&Node, MapError> {
        self.nodes
            .get(id)
            .ok_or_else(|| MapError::EntityNotFound("node".into()))
    }

    /// Returns a mutable reference to the node, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in the map.
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, MapError> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| MapError::EntityNotFound("node".into()))
    }

    /// Removes a node together with every connection that touches it.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in the map.
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node, MapError> {
        let node = self
            .nodes
            .remove(id)
            .ok_or_else(|| MapError::EntityNotFound("node".into()))?;
        let before = self.connections.len();
        self.connections.retain(|_, connection| !connection.touches(id));
        debug!(
            "Removed node and {} attached connections",
            before - self.connections.len()
        );
        Ok(node)
    }

    /// Iterates over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter()
    }

    /// Number of nodes in the map.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // --- Connection operations ---

    /// Inserts a connection and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if either end node is not in the map.
    pub fn add_connection(&mut self, connection: NodeConnection) -> Result<ConnectionId, MapError> {
        self.node(connection.from)?;
        self.node(connection.to)?;
        Ok(self.connections.insert(connection))
    }

    /// Returns a reference to the connection, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection is not in the map.
    pub fn connection(&self, id: ConnectionId) -> Result<&NodeConnection, MapError> {
        self.connections
            .get(id)
            .ok_or_else(|| MapError::EntityNotFound("connection".into()))
    }

    /// Returns a mutable reference to the connection, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection is not in the map.
    pub fn connection_mut(&mut self, id: ConnectionId) -> Result<&mut NodeConnection, MapError> {
        self.connections
            .get_mut(id)
            .ok_or_else(|| MapError::EntityNotFound("connection".into()))
    }

    /// Removes a connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection is not in the map.
    pub fn remove_connection(&mut self, id: ConnectionId) -> Result<NodeConnection, MapError> {
        self.connections
            .remove(id)
            .ok_or_else(|| MapError::EntityNotFound("connection".into()))
    }

    /// Iterates over all connections.
    pub fn connections(&self) -> impl Iterator<Item = (ConnectionId, &NodeConnection)> {
        self.connections.iter()
    }

    /// Number of connections in the map.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Iterates over the connections that can be travelled away from `node`,
    /// paired with the node each one reaches.
    pub fn outgoing(&self, node: NodeId) -> impl Iterator<Item = (ConnectionId, NodeId)> + '_ {
        self.connections
            .iter()
            .filter_map(move |(id, connection)| connection.leads_from(node).map(|to| (id, to)))
    }
}
