//! Integration tests for core graph operations (add_node, node, add_edge, etc.).

use obograph::{AttrMap, AttrValue, Direction, GraphError, OboGraph, IS_A};

#[test]
fn test_add_node() {
    let mut graph = OboGraph::new();

    let attrs = AttrMap::new().with("name", "Alpha");
    assert!(graph.add_node("X:1", attrs));

    let node = graph.node("X:1").unwrap();
    assert_eq!(node.id, "X:1");
    assert_eq!(node.attributes.get_text("name"), Some("Alpha"));
}

#[test]
fn test_node_and_node_mut() {
    let mut graph = OboGraph::new();
    graph.add_node("X:1", AttrMap::new());

    let node_mut = graph.node_mut("X:1").unwrap();
    node_mut.set_attribute("comment", "edited");

    let node = graph.node("X:1").unwrap();
    assert_eq!(node.attributes.get_text("comment"), Some("edited"));
}

#[test]
fn test_get_nonexistent_node() {
    let graph = OboGraph::new();

    let result = graph.node("X:999");
    assert_eq!(
        result.unwrap_err(),
        GraphError::NodeNotFound {
            node_id: "X:999".to_string()
        }
    );
}

#[test]
fn test_add_edge() {
    let mut graph = OboGraph::new();
    graph.add_node("X:1", AttrMap::new());
    graph.add_node("X:2", AttrMap::new());

    let edge_id = graph.add_edge("X:2", "X:1", IS_A);
    assert_eq!(edge_id, 0); // First edge should have ID 0

    let edge = graph.edge(edge_id).unwrap();
    assert_eq!(edge.triple(), ("X:2", "X:1", "is_a"));
}

#[test]
fn test_parallel_edges_distinguished_by_key() {
    let mut graph = OboGraph::new();
    graph.add_edge("X:2", "X:1", IS_A);
    graph.add_edge("X:2", "X:1", "part_of");
    graph.add_edge("X:2", "X:1", IS_A);

    let between = graph.edges_between("X:2", "X:1").unwrap();
    let keys: Vec<&str> = between.iter().map(|edge| edge.key.as_str()).collect();
    assert_eq!(keys, vec!["is_a", "part_of"]);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_edges_between_requires_both_nodes() {
    let mut graph = OboGraph::new();
    graph.add_node("X:1", AttrMap::new());

    assert!(graph.edges_between("X:1", "X:404").is_err());
    assert!(graph.edges_between("X:404", "X:1").is_err());
}

#[test]
fn test_neighbors_directions() {
    let mut graph = OboGraph::new();
    graph.add_edge("B", "A", IS_A);
    graph.add_edge("C", "B", IS_A);
    graph.add_edge("B", "D", "part_of");

    assert_eq!(graph.neighbors("B", Direction::Outgoing).unwrap(), vec!["A", "D"]);
    assert_eq!(graph.neighbors("B", Direction::Incoming).unwrap(), vec!["C"]);
    assert_eq!(
        graph.neighbors("B", Direction::Both).unwrap(),
        vec!["A", "D", "C"]
    );
}

#[test]
fn test_in_and_out_edges() {
    let mut graph = OboGraph::new();
    graph.add_edge("B", "A", IS_A);
    graph.add_edge("C", "A", IS_A);

    assert_eq!(graph.in_edges("A").unwrap().len(), 2);
    assert!(graph.out_edges("A").unwrap().is_empty());
    assert!(graph.out_edges("Z").is_err());
}

#[test]
fn test_add_edges_batch() {
    let mut graph = OboGraph::new();
    let ids = graph.add_edges(vec![
        ("X:2", "X:1", "is_a"),
        ("X:3", "X:1", "is_a"),
        ("X:2", "X:1", "is_a"),
    ]);

    assert_eq!(ids, vec![0, 1, 0]);
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn test_graph_attributes() {
    let mut graph = OboGraph::with_attributes(AttrMap::new().with("format-version", "1.2"));
    assert_eq!(graph.name(), None);

    graph.set_attribute("name", "go");
    graph
        .attributes_mut()
        .insert("typedefs", Vec::<AttrMap>::new());

    assert_eq!(graph.name(), Some("go"));
    assert_eq!(graph.attributes().get_text("format-version"), Some("1.2"));
    assert_eq!(graph.attributes().get_records("typedefs"), Some(&[][..]));
}

#[test]
fn test_traversal_through_graph_methods() {
    let mut graph = OboGraph::new();
    graph.add_edge("C", "B", IS_A);
    graph.add_edge("B", "A", IS_A);
    graph.add_edge("D", "B", "part_of");

    let mut ancestors = graph.bfs("C", Direction::Outgoing, None).unwrap();
    ancestors.sort_unstable();
    assert_eq!(ancestors, vec!["A", "B"]);

    let mut below_b = graph.dfs("B", Direction::Incoming, Some(1)).unwrap();
    below_b.sort_unstable();
    assert_eq!(below_b, vec!["C", "D"]);
}

#[test]
fn test_enumerate_node_attributes() {
    let mut graph = OboGraph::new();
    graph.add_node(
        "X:1",
        AttrMap::new()
            .with("name", "Alpha")
            .with("synonym", vec!["a", "alef"]),
    );

    let node = graph.node("X:1").unwrap();
    let mut kinds: Vec<(&str, &str)> = node
        .attributes
        .iter()
        .map(|(key, value)| (key.as_str(), value.kind()))
        .collect();
    kinds.sort_unstable();
    assert_eq!(kinds, vec![("name", "text"), ("synonym", "text list")]);

    assert_eq!(
        node.get_attribute("synonym").map(AttrValue::kind),
        Some("text list")
    );
    assert!(node.get_attribute("def").is_none());
}

#[test]
fn test_attr_map_from_pairs() {
    let attrs: AttrMap = vec![
        ("id".to_string(), AttrValue::from("part_of")),
        ("xref".to_string(), AttrValue::from(vec!["BFO:0000050"])),
    ]
    .into_iter()
    .collect();

    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs, AttrMap::new().with("id", "part_of").with("xref", vec!["BFO:0000050"]));
    assert_eq!(
        AttrValue::from(vec![AttrMap::new()]).kind(),
        "records"
    );

    // A rebuilt map from an owned iteration is identical
    let rebuilt: AttrMap = attrs.clone().into_iter().collect();
    assert_eq!(rebuilt, attrs);
}
