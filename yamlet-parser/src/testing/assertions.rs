//! Fluent tree assertions

use crate::tree::Node;

/// Start asserting on a tree
pub fn assert_tree(node: &Node) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: "root".to_string(),
    }
}

fn summarize_children(node: &Node) -> String {
    node.children()
        .iter()
        .map(|child| match (child.name(), child.value()) {
            ("", "") => "<container>".to_string(),
            ("", value) => value.to_string(),
            (name, "") => format!("{}:", name),
            (name, value) => format!("{}: {}", name, value),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.node.name(),
            expected,
            "{}: Expected name '{}', found '{}'",
            self.context,
            expected,
            self.node.name()
        );
        self
    }

    pub fn value(self, expected: &str) -> Self {
        assert_eq!(
            self.node.value(),
            expected,
            "{}: Expected value '{}', found '{}'",
            self.context,
            expected,
            self.node.value()
        );
        self
    }

    pub fn is_container(self) -> Self {
        assert!(
            self.node.is_container(),
            "{}: Expected a container, found {:?}",
            self.context,
            self.node.kind()
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children().len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {} children: [{}]",
            self.context,
            expected,
            actual,
            summarize_children(self.node)
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let children = self.node.children();
        assert!(
            index < children.len(),
            "{}: Child index {} out of bounds ({} children)",
            self.context,
            index,
            children.len()
        );
        assertion(NodeAssertion {
            node: &children[index],
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    pub fn attribute(self, key: &str, expected: &str) -> Self {
        assert_eq!(
            self.node.attribute(key),
            Some(expected),
            "{}: Expected attribute '{}' = '{}', found {:?}",
            self.context,
            key,
            expected,
            self.node.attributes()
        );
        self
    }

    pub fn attribute_count(self, expected: usize) -> Self {
        assert_eq!(
            self.node.attributes().len(),
            expected,
            "{}: Expected {} attributes, found {:?}",
            self.context,
            expected,
            self.node.attributes()
        );
        self
    }

    pub fn no_attributes(self) -> Self {
        self.attribute_count(0)
    }
}

/// Compare two trees including child and attribute order.
///
/// `Node`'s `PartialEq` treats attributes as a map; this is stricter.
pub fn assert_trees_match(actual: &Node, expected: &Node) {
    compare(actual, expected, "root");
}

fn compare(actual: &Node, expected: &Node, context: &str) {
    assert_eq!(actual.kind(), expected.kind(), "{}: kind differs", context);

    let actual_attributes: Vec<_> = actual.attributes().iter().collect();
    let expected_attributes: Vec<_> = expected.attributes().iter().collect();
    assert_eq!(
        actual_attributes, expected_attributes,
        "{}: attributes differ",
        context
    );

    assert_eq!(
        actual.children().len(),
        expected.children().len(),
        "{}: child count differs: [{}] vs [{}]",
        context,
        summarize_children(actual),
        summarize_children(expected)
    );
    for (i, (a, e)) in actual
        .children()
        .iter()
        .zip(expected.children())
        .enumerate()
    {
        compare(a, e, &format!("{}[{}]", context, i));
    }
}
