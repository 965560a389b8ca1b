//! Main OboGraph interface for graph operations.

use super::attrs::{AttrMap, AttrValue};
use super::types::{Direction, Edge, EdgeId, Node};
use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::collections::{HashMap, HashSet};

/// An owned directed multigraph of ontology terms.
///
/// Nodes are keyed by identifier and kept in insertion order. Edges are keyed by
/// `(source, target, key)`; inserting an existing triple is a no-op.
#[derive(Debug, Clone, Default)]
pub struct OboGraph {
    // Graph-level attributes (header tags, typedefs, instances)
    attributes: AttrMap,
    nodes: Vec<Node>,
    node_index: HashMap<String, usize>,
    edges: Vec<Edge>,
    // Adjacency indexes for O(degree) neighbor lookups
    adjacency_out: HashMap<String, Vec<EdgeId>>,
    adjacency_in: HashMap<String, Vec<EdgeId>>,
}

impl OboGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph carrying the given graph-level attributes.
    pub fn with_attributes(attributes: AttrMap) -> Self {
        Self {
            attributes,
            ..Self::default()
        }
    }

    /// Graph-level attributes.
    pub fn attributes(&self) -> &AttrMap {
        &self.attributes
    }

    /// Mutable access to graph-level attributes.
    pub fn attributes_mut(&mut self) -> &mut AttrMap {
        &mut self.attributes
    }

    /// Set one graph-level attribute.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.insert(key, value);
    }

    /// The graph's `name` attribute.
    ///
    /// A repeated `name` tag yields its first value.
    pub fn name(&self) -> Option<&str> {
        match self.attributes.get("name")? {
            AttrValue::Text(name) => Some(name),
            AttrValue::TextList(names) => names.first().map(String::as_str),
            AttrValue::Records(_) => None,
        }
    }

    /// Add a node, or merge `attributes` into an existing node with the same id.
    ///
    /// Returns `true` if the node was newly created.
    pub fn add_node(&mut self, id: impl Into<String>, attributes: AttrMap) -> bool {
        let id = id.into();
        if let Some(&index) = self.node_index.get(&id) {
            trace!("Merging {} attributes into node {id}", attributes.len());
            self.nodes[index].attributes.extend(attributes);
            return false;
        }
        trace!("Adding node {id}");
        self.node_index.insert(id.clone(), self.nodes.len());
        self.nodes.push(Node::new(id, attributes));
        true
    }

    /// Get a node by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn node(&self, id: &str) -> Result<&Node> {
        self.node_index
            .get(id)
            .map(|&index| &self.nodes[index])
            .ok_or_else(|| GraphError::node_not_found(id))
    }

    /// Get a mutable reference to a node by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn node_mut(&mut self, id: &str) -> Result<&mut Node> {
        match self.node_index.get(id) {
            Some(&index) => Ok(&mut self.nodes[index]),
            None => Err(GraphError::node_not_found(id)),
        }
    }

    /// Check whether a node exists.
    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Iterate over nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Iterate over node identifiers in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|node| node.id.as_str())
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Add a directed edge keyed by relationship type.
    ///
    /// Endpoints that are not nodes yet are created with empty attributes.
    /// If the `(source, target, key)` edge already exists its id is returned and
    /// nothing is added.
    pub fn add_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        key: impl Into<String>,
    ) -> EdgeId {
        let (source, target, key) = (source.into(), target.into(), key.into());
        if let Some(existing) = self.find_edge(&source, &target, &key) {
            trace!("Edge {source} -[{key}]-> {target} already present");
            return existing;
        }

        self.ensure_node(&source);
        self.ensure_node(&target);

        let edge_id = self.edges.len() as EdgeId;
        trace!("Adding edge {edge_id}: {source} -[{key}]-> {target}");
        self.adjacency_out
            .entry(source.clone())
            .or_default()
            .push(edge_id);
        self.adjacency_in
            .entry(target.clone())
            .or_default()
            .push(edge_id);
        self.edges.push(Edge::new(edge_id, source, target, key));

        edge_id
    }

    /// Add a batch of `(source, target, key)` edges in order.
    ///
    /// Returns the ids in the same order as the input.
    pub fn add_edges<I, S, T, K>(&mut self, edges: I) -> Vec<EdgeId>
    where
        I: IntoIterator<Item = (S, T, K)>,
        S: Into<String>,
        T: Into<String>,
        K: Into<String>,
    {
        let ids: Vec<EdgeId> = edges
            .into_iter()
            .map(|(source, target, key)| self.add_edge(source, target, key))
            .collect();
        debug!("Added batch of {} edges", ids.len());
        ids
    }

    /// Get an edge by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the edge doesn't exist.
    pub fn edge(&self, id: EdgeId) -> Result<&Edge> {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.edges.get(index))
            .ok_or_else(|| GraphError::edge_not_found(id))
    }

    /// Iterate over edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Get the total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check whether the keyed edge exists.
    pub fn has_edge(&self, source: &str, target: &str, key: &str) -> bool {
        self.find_edge(source, target, key).is_some()
    }

    /// Get all edges from `source` to `target`, any key.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint doesn't exist.
    pub fn edges_between(&self, source: &str, target: &str) -> Result<Vec<&Edge>> {
        self.node(target)?;
        Ok(self
            .out_edges(source)?
            .into_iter()
            .filter(|edge| edge.target == target)
            .collect())
    }

    /// Edges leaving `id`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn out_edges(&self, id: &str) -> Result<Vec<&Edge>> {
        self.node(id)?;
        Ok(self.collect_edges(self.adjacency_out.get(id)))
    }

    /// Edges entering `id`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn in_edges(&self, id: &str) -> Result<Vec<&Edge>> {
        self.node(id)?;
        Ok(self.collect_edges(self.adjacency_in.get(id)))
    }

    /// Get all neighbor nodes connected by edges in the specified direction.
    ///
    /// Each neighbor appears once, in the order its first connecting edge was added.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn neighbors(&self, id: &str, direction: Direction) -> Result<Vec<&str>> {
        let mut seen = HashSet::new();
        let mut neighbors = Vec::new();

        if matches!(direction, Direction::Outgoing | Direction::Both) {
            for edge in self.out_edges(id)? {
                if seen.insert(edge.target.as_str()) {
                    neighbors.push(edge.target.as_str());
                }
            }
        }
        if matches!(direction, Direction::Incoming | Direction::Both) {
            for edge in self.in_edges(id)? {
                if seen.insert(edge.source.as_str()) {
                    neighbors.push(edge.source.as_str());
                }
            }
        }

        Ok(neighbors)
    }

    // ===== Algorithm Methods =====

    /// Breadth-first traversal from `start`, excluding the start node.
    pub fn bfs(&self, start: &str, direction: Direction, max_depth: Option<usize>) -> Result<Vec<&str>> {
        super::algorithms::bfs(self, start, direction, max_depth)
    }

    /// Depth-first traversal from `start`, excluding the start node.
    pub fn dfs(&self, start: &str, direction: Direction, max_depth: Option<usize>) -> Result<Vec<&str>> {
        super::algorithms::dfs(self, start, direction, max_depth)
    }

    // Private helper methods

    fn ensure_node(&mut self, id: &str) {
        if !self.node_index.contains_key(id) {
            trace!("Creating implicit node {id}");
            self.node_index.insert(id.to_string(), self.nodes.len());
            self.nodes.push(Node::new(id, AttrMap::new()));
        }
    }

    fn find_edge(&self, source: &str, target: &str, key: &str) -> Option<EdgeId> {
        self.adjacency_out.get(source)?.iter().copied().find(|&id| {
            let edge = &self.edges[id as usize];
            edge.target == target && edge.key == key
        })
    }

    fn collect_edges(&self, ids: Option<&Vec<EdgeId>>) -> Vec<&Edge> {
        ids.map(|ids| ids.iter().map(|&id| &self.edges[id as usize]).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_merges_attributes() {
        let mut graph = OboGraph::new();
        assert!(graph.add_node("X:1", AttrMap::new().with("name", "Alpha")));
        assert!(!graph.add_node("X:1", AttrMap::new().with("namespace", "test")));

        let node = graph.node("X:1").unwrap();
        assert_eq!(node.name(), Some("Alpha"));
        assert_eq!(node.attributes.get_text("namespace"), Some("test"));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_add_edge_creates_dangling_target() {
        let mut graph = OboGraph::new();
        graph.add_node("X:2", AttrMap::new());
        graph.add_edge("X:2", "Y:9", "part_of");

        assert!(graph.contains_node("Y:9"));
        assert!(graph.node("Y:9").unwrap().attributes.is_empty());
        assert!(graph.has_edge("X:2", "Y:9", "part_of"));
    }

    #[test]
    fn test_same_keyed_edge_is_idempotent() {
        let mut graph = OboGraph::new();
        let first = graph.add_edge("A", "B", "is_a");
        let second = graph.add_edge("A", "B", "is_a");
        let other = graph.add_edge("A", "B", "part_of");

        assert_eq!(first, second);
        assert_ne!(first, other);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_node_order_is_insertion_order() {
        let mut graph = OboGraph::new();
        graph.add_node("B", AttrMap::new());
        graph.add_node("A", AttrMap::new());
        graph.add_edge("A", "C", "is_a");

        let ids: Vec<&str> = graph.node_ids().collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_edge_lookup_out_of_range() {
        let graph = OboGraph::new();
        assert!(matches!(graph.edge(3), Err(GraphError::EdgeNotFound { .. })));
    }
}
