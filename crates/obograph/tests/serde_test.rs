//! Serialization of the graph model types.

use obograph::{AttrMap, AttrValue, Edge, Node};

#[test]
fn test_node_serde_json() {
    let node = Node::new(
        "GO:0005575",
        AttrMap::new()
            .with("name", "cellular_component")
            .with("alt_id", vec!["GO:0008372"]),
    );

    let json = serde_json::to_string(&node).unwrap();
    let back: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(back, node);
}

#[test]
fn test_records_value_shape() {
    let typedef = AttrMap::new().with("id", "part_of").with("name", "part of");
    let value = AttrValue::Records(vec![typedef]);

    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(json["Records"][0]["data"]["id"]["Text"], "part_of");
}

#[test]
fn test_edge_serde_json() {
    let edge = Edge::new(7, "X:2", "Y:9", "part_of");
    let json = serde_json::to_value(&edge).unwrap();

    assert_eq!(json["source"], "X:2");
    assert_eq!(json["target"], "Y:9");
    assert_eq!(json["key"], "part_of");
}
