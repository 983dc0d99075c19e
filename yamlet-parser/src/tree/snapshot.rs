//! Node snapshot - a normalized, serializable view of a Document Tree
//!
//! Output formats that only present a tree (JSON, treeviz) consume a snapshot instead of
//! walking [Node]s themselves, so traversal lives in one place and each formatter only deals
//! with presentation.

use super::node::{Attributes, Node, NodeKind};
use serde::Serialize;

/// A snapshot of a node and its subtree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSnapshot {
    /// "Container", "Scalar" or "Entry"
    pub node_type: String,

    /// Human readable one-line label
    pub label: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,

    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

fn node_type(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::Container => "Container",
        NodeKind::Scalar { .. } => "Scalar",
        NodeKind::Entry { .. } => "Entry",
    }
}

fn display_label(node: &Node) -> String {
    match node.kind() {
        NodeKind::Container => format!("{} children", node.children().len()),
        NodeKind::Scalar { value } => value.clone(),
        NodeKind::Entry { name, value } if value.is_empty() => name.clone(),
        NodeKind::Entry { name, value } => format!("{}: {}", name, value),
    }
}

/// Create a snapshot of a node and all its descendants
pub fn snapshot_node(node: &Node) -> NodeSnapshot {
    NodeSnapshot {
        node_type: node_type(node.kind()).to_string(),
        label: display_label(node),
        name: node.name().to_string(),
        value: node.value().to_string(),
        attributes: node.attributes().clone(),
        children: node.children().iter().map(snapshot_node).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_labels() {
        let root = Node::container()
            .with_child(Node::entry("name", "hero"))
            .with_child(Node::entry("stats", "").with_child(Node::scalar("10")));

        let snapshot = snapshot_node(&root);
        assert_eq!(snapshot.node_type, "Container");
        assert_eq!(snapshot.label, "2 children");
        assert_eq!(snapshot.children[0].label, "name: hero");
        assert_eq!(snapshot.children[1].label, "stats");
        assert_eq!(snapshot.children[1].children[0].node_type, "Scalar");
        assert_eq!(snapshot.children[1].children[0].label, "10");
    }

    #[test]
    fn test_snapshot_serializes_without_empty_fields() {
        let node = Node::entry("hp", "10").with_attribute("type", "int");
        let json = serde_json::to_string(&snapshot_node(&node)).expect("serializes");
        assert_eq!(
            json,
            r#"{"node_type":"Entry","label":"hp: 10","name":"hp","value":"10","attributes":{"type":"int"}}"#
        );
    }
}
