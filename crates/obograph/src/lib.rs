//! # obograph
//!
//! An owned, in-memory directed multigraph for ontology terms and their typed relationships.
//!
//! ## Core Principles
//!
//! - **Owned Storage**: Nodes, edges and graph attributes live in plain maps and vectors
//! - **String Identity**: Nodes are keyed by their ontology identifier (`GO:0008150`)
//! - **Keyed Multi-Edges**: Parallel edges between two nodes are told apart by a relationship key
//! - **Dangling Targets**: Edges may point at identifiers that were never declared as terms
//!
//! ## Architecture
//!
//! ```text
//! Format Parsers (obograph-parser)
//!     ↓
//! Attribute Maps (text, text lists, stanza records)
//!     ↓
//! Core Graph (nodes, keyed edges, graph attributes)
//!     ↓
//! Traversal (neighbors, BFS, DFS)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use obograph::{AttrMap, Direction, OboGraph};
//!
//! let mut graph = OboGraph::new();
//! graph.add_node("X:1", AttrMap::new().with("name", "Alpha"));
//! graph.add_node("X:2", AttrMap::new().with("name", "Beta"));
//! graph.add_edge("X:2", "X:1", "is_a");
//!
//! let parents = graph.neighbors("X:2", Direction::Outgoing).unwrap();
//! assert_eq!(parents, vec!["X:1"]);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod graph;

// Re-export main types
pub use error::{GraphError, Result};
pub use graph::{AttrMap, AttrValue, Direction, Edge, EdgeId, Node, OboGraph, IS_A};
