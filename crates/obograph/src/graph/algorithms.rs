//! Graph traversal algorithms.
//!
//! With `is_a` edges pointing from a term to its parent, an outgoing traversal
//! collects superterms and an incoming traversal collects subterms.

use crate::error::Result;
use crate::graph::{Direction, OboGraph};
use std::collections::{HashSet, VecDeque};

/// Breadth-First Search traversal from a starting node.
///
/// Returns all reachable nodes within the specified depth limit.
///
/// # Parameters
/// - `graph`: The graph to traverse
/// - `start`: Starting node identifier
/// - `direction`: Follow outgoing or incoming edges
/// - `max_depth`: Optional maximum depth (None for unlimited)
///
/// # Returns
/// Vec of reachable node identifiers (excluding the start node)
pub fn bfs<'g>(
    graph: &'g OboGraph,
    start: &str,
    direction: Direction,
    max_depth: Option<usize>,
) -> Result<Vec<&'g str>> {
    let start = graph.node(start)?.id.as_str();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut result = Vec::new();

    visited.insert(start);
    queue.push_back((start, 0)); // (node_id, depth)

    while let Some((current, depth)) = queue.pop_front() {
        if max_depth.is_some_and(|max| depth >= max) {
            continue;
        }

        for neighbor in graph.neighbors(current, direction)? {
            if visited.insert(neighbor) {
                result.push(neighbor);
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    Ok(result)
}

/// Depth-First Search traversal from a starting node (iterative implementation).
///
/// Uses an explicit stack so deep hierarchies cannot overflow.
///
/// # Returns
/// Vec of reachable node identifiers (excluding the start node)
pub fn dfs<'g>(
    graph: &'g OboGraph,
    start: &str,
    direction: Direction,
    max_depth: Option<usize>,
) -> Result<Vec<&'g str>> {
    let start = graph.node(start)?.id.as_str();
    let mut visited = HashSet::new();
    let mut stack = Vec::new();
    let mut result = Vec::new();

    visited.insert(start);
    stack.push((start, 0));

    while let Some((current, depth)) = stack.pop() {
        if max_depth.is_some_and(|max| depth >= max) {
            continue;
        }

        for neighbor in graph.neighbors(current, direction)? {
            if visited.insert(neighbor) {
                result.push(neighbor);
                stack.push((neighbor, depth + 1));
            }
        }
    }

    Ok(result)
}
