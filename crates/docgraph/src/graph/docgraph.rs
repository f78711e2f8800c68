//! Main DocGraph interface for graph operations.

use super::property::PropertyMap;
use super::types::{Edge, EdgeId, EdgeType, Node, NodeId, NodeType};
use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::collections::HashMap;

/// Append-only graph of file and doc nodes.
///
/// Handles are indexes into the node and edge arenas, so they stay valid for
/// the lifetime of the graph. Edges are not validated on insertion: the
/// caller decides what links to what.
#[derive(Debug, Default)]
pub struct DocGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    // Incoming edges per target, in creation order
    adjacency_in: HashMap<NodeId, Vec<EdgeId>>,
}

impl DocGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the graph.
    ///
    /// # Returns
    ///
    /// The handle assigned to the created node.
    pub fn add_node(&mut self, node_type: NodeType, properties: PropertyMap) -> NodeId {
        let node_id = self.nodes.len() as NodeId;
        debug!("Adding node: id={node_id}, type={node_type}");
        self.nodes.push(Node::new(node_id, node_type, properties));
        node_id
    }

    /// Add an edge to the graph.
    ///
    /// No duplicate, cycle or membership checks are made.
    pub fn add_edge(&mut self, edge_type: EdgeType, source_id: NodeId, target_id: NodeId) -> EdgeId {
        let edge_id = self.edges.len() as EdgeId;
        debug!("Adding edge: source={source_id}, target={target_id}, type={edge_type}");
        self.edges
            .push(Edge::new(edge_id, edge_type, source_id, target_id));
        self.adjacency_in.entry(target_id).or_default().push(edge_id);
        trace!("Edge {edge_id} added successfully");
        edge_id
    }

    /// Get a node by handle.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the handle is unknown.
    pub fn get_node(&self, id: NodeId) -> Result<&Node> {
        usize::try_from(id)
            .ok()
            .and_then(|idx| self.nodes.get(idx))
            .ok_or_else(|| GraphError::NodeNotFound {
                node_id: id.to_string(),
            })
    }

    /// All nodes of the given type, in insertion order.
    pub fn find_nodes(&self, node_type: NodeType) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|node| node.node_type == node_type)
            .collect()
    }

    /// Sources of every `edge_type` edge pointing at `target_id`, in edge
    /// creation order.
    pub fn linked_sources(&self, target_id: NodeId, edge_type: EdgeType) -> Vec<NodeId> {
        self.adjacency_in
            .get(&target_id)
            .into_iter()
            .flatten()
            .filter_map(|edge_id| self.edges.get(*edge_id as usize))
            .filter(|edge| edge.edge_type == edge_type)
            .map(|edge| edge.source_id)
            .collect()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
