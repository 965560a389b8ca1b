//! Error types for graph operations.
//!
//! Lookups that miss return [`Result<T>`] with the identifier that was asked for.

use thiserror::Error;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for all graph operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Node not found in the graph
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// Identifier of the missing node
        node_id: String,
    },

    /// Edge not found in the graph
    #[error("Edge not found: {edge_id}")]
    EdgeNotFound {
        /// ID of the missing edge
        edge_id: String,
    },
}

impl GraphError {
    /// Create a node-not-found error for the given identifier.
    pub fn node_not_found(node_id: impl Into<String>) -> Self {
        Self::NodeNotFound {
            node_id: node_id.into(),
        }
    }

    /// Create an edge-not-found error for the given edge id.
    pub fn edge_not_found(edge_id: impl ToString) -> Self {
        Self::EdgeNotFound {
            edge_id: edge_id.to_string(),
        }
    }
}
