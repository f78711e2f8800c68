//! Integration tests for core graph operations (add_node, add_edge, find_nodes, etc.).

use docgraph::{DocGraph, EdgeType, NodeType, PropertyMap};

fn file_props(path: &str) -> PropertyMap {
    PropertyMap::new().with("path", path).with("content", "")
}

fn doc_props(title: &str) -> PropertyMap {
    PropertyMap::new()
        .with("title", title)
        .with("body", "(no description)")
        .with("lang", "py")
}

#[test]
fn test_add_node() {
    let mut graph = DocGraph::new();

    let node_id = graph.add_node(NodeType::File, file_props("src/a.py"));
    assert_eq!(node_id, 0);

    let node = graph.get_node(node_id).unwrap();
    assert_eq!(node.node_type, NodeType::File);
    assert_eq!(node.get_property("path"), Some("src/a.py"));
}

#[test]
fn test_find_nodes_filters_by_type_in_insertion_order() {
    let mut graph = DocGraph::new();

    let f1 = graph.add_node(NodeType::File, file_props("src/a.py"));
    let d1 = graph.add_node(NodeType::Doc, doc_props("module"));
    let f2 = graph.add_node(NodeType::File, file_props("src/b.js"));
    let d2 = graph.add_node(NodeType::Doc, doc_props("comment_block"));

    let files: Vec<_> = graph.find_nodes(NodeType::File).iter().map(|n| n.id).collect();
    let docs: Vec<_> = graph.find_nodes(NodeType::Doc).iter().map(|n| n.id).collect();

    assert_eq!(files, vec![f1, f2]);
    assert_eq!(docs, vec![d1, d2]);
}

#[test]
fn test_linked_sources_follow_edge_creation_order() {
    let mut graph = DocGraph::new();

    let file = graph.add_node(NodeType::File, file_props("src/a.py"));
    let other = graph.add_node(NodeType::File, file_props("src/b.py"));
    let first = graph.add_node(NodeType::Doc, doc_props("def b()"));
    let second = graph.add_node(NodeType::Doc, doc_props("def a()"));
    let elsewhere = graph.add_node(NodeType::Doc, doc_props("module"));

    graph.add_edge(EdgeType::ForFile, second, file);
    graph.add_edge(EdgeType::ForFile, elsewhere, other);
    graph.add_edge(EdgeType::ForFile, first, file);

    assert_eq!(graph.linked_sources(file, EdgeType::ForFile), vec![second, first]);
    assert_eq!(graph.linked_sources(other, EdgeType::ForFile), vec![elsewhere]);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_file_without_docs_has_no_sources() {
    let mut graph = DocGraph::new();
    let file = graph.add_node(NodeType::File, file_props("src/empty.c"));

    assert!(graph.linked_sources(file, EdgeType::ForFile).is_empty());
}

#[test]
fn test_duplicate_edges_are_kept() {
    let mut graph = DocGraph::new();
    let file = graph.add_node(NodeType::File, file_props("src/a.py"));
    let doc = graph.add_node(NodeType::Doc, doc_props("module"));

    graph.add_edge(EdgeType::ForFile, doc, file);
    graph.add_edge(EdgeType::ForFile, doc, file);

    assert_eq!(graph.linked_sources(file, EdgeType::ForFile), vec![doc, doc]);
}

#[test]
fn test_nodes_serialize_with_wire_names() {
    let mut graph = DocGraph::new();
    let id = graph.add_node(NodeType::Doc, doc_props("module"));

    let json = serde_json::to_value(graph.get_node(id).unwrap()).unwrap();
    assert_eq!(json["node_type"], "doc");
    assert_eq!(json["properties"]["title"], "module");
}
