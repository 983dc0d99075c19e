//! Node element
//!
//!     See the [tree module](super) for the roles a node can take.

use indexmap::IndexMap;

/// Attribute storage: insertion ordered, keys unique.
pub type Attributes = IndexMap<String, String>;

/// The role of a node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NodeKind {
    /// No name and no value: the document root or a wrapper around other nodes.
    #[default]
    Container,
    /// A bare value without a key, as found in sequences.
    Scalar { value: String },
    /// A keyed entry. `value` is empty when the entry only carries children.
    Entry { name: String, value: String },
}

impl NodeKind {
    /// Infer the role from a name/value pair the way the text format does.
    pub fn infer(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match (name.is_empty(), value.is_empty()) {
            (true, true) => NodeKind::Container,
            (true, false) => NodeKind::Scalar { value },
            (false, _) => NodeKind::Entry { name, value },
        }
    }
}

/// A node of the Document Tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    kind: NodeKind,
    children: Vec<Node>,
    attributes: Attributes,
}

impl Node {
    /// Build a node from its textual name and value, inferring its [NodeKind].
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::from_kind(NodeKind::infer(name, value))
    }

    pub fn from_kind(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
            attributes: Attributes::new(),
        }
    }

    /// An empty container, e.g. a fresh document root.
    pub fn container() -> Self {
        Self::from_kind(NodeKind::Container)
    }

    pub fn scalar(value: impl Into<String>) -> Self {
        Self::new("", value)
    }

    pub fn entry(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value)
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The node's name, or an empty string for containers and scalars.
    pub fn name(&self) -> &str {
        match &self.kind {
            NodeKind::Entry { name, .. } => name,
            NodeKind::Container | NodeKind::Scalar { .. } => "",
        }
    }

    /// The node's value, or an empty string when it has none.
    pub fn value(&self) -> &str {
        match &self.kind {
            NodeKind::Scalar { value } | NodeKind::Entry { value, .. } => value,
            NodeKind::Container => "",
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, NodeKind::Container)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Append a child and hand it back for further building.
    pub fn add_child(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Builder flavour of [Node::add_child].
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// First direct child whose name matches.
    pub fn find_child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.name() == name)
    }

    pub fn find_child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.iter_mut().find(|child| child.name() == name)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Insert or overwrite an attribute. A new key goes last; an existing key keeps its slot.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Builder flavour of [Node::set_attribute].
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Remove an attribute, keeping the relative order of the others.
    pub fn remove_attribute(&mut self, key: &str) -> Option<String> {
        self.attributes.shift_remove(key)
    }

    pub fn clear_attributes(&mut self) {
        self.attributes.clear();
    }

    /// Number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Length of the longest root-to-leaf path, counting this node as depth 0.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_inference() {
        assert_eq!(Node::new("", "").kind(), &NodeKind::Container);
        assert_eq!(
            Node::new("", "7").kind(),
            &NodeKind::Scalar {
                value: "7".to_string()
            }
        );
        assert_eq!(
            Node::new("hp", "").kind(),
            &NodeKind::Entry {
                name: "hp".to_string(),
                value: String::new()
            }
        );
    }

    #[test]
    fn test_name_and_value_accessors() {
        let entry = Node::entry("hp", "10");
        assert_eq!(entry.name(), "hp");
        assert_eq!(entry.value(), "10");

        let scalar = Node::scalar("sword");
        assert_eq!(scalar.name(), "");
        assert_eq!(scalar.value(), "sword");

        let root = Node::container();
        assert!(root.is_container());
        assert_eq!(root.name(), "");
        assert_eq!(root.value(), "");
    }

    #[test]
    fn test_add_child_returns_added_node() {
        let mut root = Node::container();
        root.add_child(Node::entry("stats", ""))
            .add_child(Node::entry("hp", "10"));

        assert_eq!(root.children().len(), 1);
        let stats = &root.children()[0];
        assert_eq!(stats.name(), "stats");
        assert_eq!(stats.children()[0].value(), "10");
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let root = Node::container()
            .with_child(Node::entry("b", "2"))
            .with_child(Node::entry("a", "1"))
            .with_child(Node::entry("c", "3"));

        let names: Vec<_> = root.children().iter().map(Node::name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_set_attribute_overwrites_in_place() {
        let mut node = Node::entry("hp", "10");
        node.set_attribute("type", "int")
            .set_attribute("min", "0")
            .set_attribute("type", "uint");

        let pairs: Vec<_> = node
            .attributes()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(pairs, vec![("type", "uint"), ("min", "0")]);
    }

    #[test]
    fn test_remove_attribute_keeps_order() {
        let mut node = Node::container()
            .with_attribute("a", "1")
            .with_attribute("b", "2")
            .with_attribute("c", "3");

        assert_eq!(node.remove_attribute("b"), Some("2".to_string()));
        assert_eq!(node.remove_attribute("missing"), None);
        let keys: Vec<_> = node.attributes().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_clear_operations() {
        let mut node = Node::entry("stats", "")
            .with_child(Node::entry("hp", "10"))
            .with_attribute("type", "map");

        node.clear_children();
        assert!(node.children().is_empty());
        assert_eq!(node.attribute("type"), Some("map"));

        node.clear_attributes();
        assert!(node.attributes().is_empty());
    }

    #[test]
    fn test_find_child() {
        let mut root = Node::container()
            .with_child(Node::entry("name", "hero"))
            .with_child(Node::entry("stats", ""));

        assert_eq!(root.find_child("name").map(Node::value), Some("hero"));
        assert!(root.find_child("missing").is_none());

        root.find_child_mut("stats")
            .expect("stats entry")
            .add_child(Node::entry("hp", "10"));
        assert_eq!(root.find_child("stats").unwrap().children().len(), 1);
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Node::container().with_child(Node::entry("a", "1"));
        let mut copy = original.clone();
        copy.children_mut()[0].set_attribute("k", "v");

        assert!(original.children()[0].attributes().is_empty());
        assert_eq!(copy.children()[0].attribute("k"), Some("v"));
    }

    #[test]
    fn test_count_and_depth() {
        let root = Node::container().with_child(
            Node::entry("a", "").with_child(Node::entry("b", "").with_child(Node::scalar("c"))),
        );
        assert_eq!(root.node_count(), 4);
        assert_eq!(root.depth(), 3);
        assert_eq!(Node::container().depth(), 0);
    }
}
