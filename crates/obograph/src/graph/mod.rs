//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`AttrMap`]: Tag-to-value metadata shared by stanzas, nodes and the graph itself
//! - [`Node`] / [`Edge`]: Terms and their keyed, directed relationships
//! - [`OboGraph`]: The owned multigraph

mod attrs;
mod multigraph;
mod types;
pub mod algorithms;

pub use attrs::{AttrMap, AttrValue};
pub use multigraph::OboGraph;
pub use types::{Direction, Edge, EdgeId, Node, IS_A};
