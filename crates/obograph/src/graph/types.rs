//! Core graph types: nodes, edges, IDs, and enums.

use super::attrs::{AttrMap, AttrValue};
use serde::{Deserialize, Serialize};

/// Unique identifier for an edge (monotonic counter).
pub type EdgeId = u64;

/// Relationship key used for subsumption (`is_a`) edges.
pub const IS_A: &str = "is_a";

/// Direction for neighbor queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Follow outgoing edges (from this node)
    Outgoing,
    /// Follow incoming edges (to this node)
    Incoming,
    /// Follow edges in both directions
    Both,
}

/// A term node in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Ontology identifier, e.g. `GO:0008150`
    pub id: String,
    /// Remaining stanza tags
    pub attributes: AttrMap,
}

impl Node {
    /// Create a new node.
    pub fn new(id: impl Into<String>, attributes: AttrMap) -> Self {
        Self {
            id: id.into(),
            attributes,
        }
    }

    /// Add or update an attribute.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.insert(key, value);
    }

    /// Get an attribute value.
    pub fn get_attribute(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// The node's `name` tag, if present.
    pub fn name(&self) -> Option<&str> {
        self.attributes.get_text("name")
    }
}

/// A directed, keyed edge.
///
/// `(source, target, key)` is unique within a graph; parallel edges between the
/// same pair differ by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier (assigned by graph)
    pub id: EdgeId,
    /// Source term identifier
    pub source: String,
    /// Target term identifier
    pub target: String,
    /// Relationship type, e.g. `is_a` or `part_of`
    pub key: String,
}

impl Edge {
    /// Create a new edge (ID will be assigned by graph).
    pub fn new(
        id: EdgeId,
        source: impl Into<String>,
        target: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            id,
            source: source.into(),
            target: target.into(),
            key: key.into(),
        }
    }

    /// The edge as a `(source, target, key)` triple.
    pub fn triple(&self) -> (&str, &str, &str) {
        (&self.source, &self.target, &self.key)
    }
}
