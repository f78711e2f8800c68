//! Error types for docgraph operations.

use thiserror::Error;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised when reading from a [`DocGraph`](crate::DocGraph).
///
/// Inserting never fails; only lookups by handle or property key can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Node handle does not belong to the graph
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// Handle of the missing node
        node_id: String,
    },

    /// Property not found
    #[error("Property '{key}' not found on {entity_type} {entity_id}")]
    PropertyNotFound {
        /// Entity type (file, doc)
        entity_type: String,
        /// Entity identifier
        entity_id: String,
        /// Property key that was missing
        key: String,
    },
}

impl GraphError {
    /// Create a property-not-found error.
    pub fn property_not_found(
        entity_type: impl Into<String>,
        entity_id: impl ToString,
        key: impl Into<String>,
    ) -> Self {
        Self::PropertyNotFound {
            entity_type: entity_type.into(),
            entity_id: entity_id.to_string(),
            key: key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_not_found_error() {
        let err = GraphError::NodeNotFound {
            node_id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Node not found: 42");
    }

    #[test]
    fn test_property_not_found_error() {
        let err = GraphError::property_not_found("doc", 7u64, "title");
        assert_eq!(err.to_string(), "Property 'title' not found on doc 7");
    }
}
