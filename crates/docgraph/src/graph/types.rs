//! Core graph types: nodes, edges, IDs, and enums.

use super::property::PropertyMap;
use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};

/// Handle of a node (its position in the graph's node arena).
pub type NodeId = u64;

/// Handle of an edge (its position in the graph's edge list).
pub type EdgeId = u64;

/// Type of a node in the doc graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    /// Scanned source file
    File,
    /// One extracted documentation item
    Doc,
}

impl NodeType {
    /// Wire name of the node type (`file` / `doc`).
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::File => "file",
            NodeType::Doc => "doc",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of edge (relationship) between nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    /// Doc item was extracted from the target file
    ForFile,
}

impl EdgeType {
    /// Wire name of the edge type.
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeType::ForFile => "for_file",
        }
    }
}

impl std::fmt::Display for EdgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the doc graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Handle assigned by the graph
    pub id: NodeId,
    /// File or doc
    pub node_type: NodeType,
    /// Named string properties
    pub properties: PropertyMap,
}

impl Node {
    /// Create a new node (ID will be assigned by graph).
    pub fn new(id: NodeId, node_type: NodeType, properties: PropertyMap) -> Self {
        Self {
            id,
            node_type,
            properties,
        }
    }

    /// Get a property value.
    pub fn get_property(&self, key: &str) -> Option<&str> {
        self.properties.get_string(key)
    }

    /// Get a property value that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::PropertyNotFound`] if the key is absent.
    pub fn require_property(&self, key: &str) -> Result<&str> {
        self.get_property(key)
            .ok_or_else(|| GraphError::property_not_found(self.node_type.as_str(), self.id, key))
    }
}

/// A directed edge in the doc graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Handle assigned by the graph
    pub id: EdgeId,
    /// Type of relationship
    pub edge_type: EdgeType,
    /// Source node (a doc)
    pub source_id: NodeId,
    /// Target node (a file)
    pub target_id: NodeId,
}

impl Edge {
    /// Create a new edge (ID will be assigned by graph).
    pub fn new(id: EdgeId, edge_type: EdgeType, source_id: NodeId, target_id: NodeId) -> Self {
        Self {
            id,
            edge_type,
            source_id,
            target_id,
        }
    }
}
