//! Building: Section tree → Document Tree
//!
//!     This is the semantic half of decoding. Sections only know their text and where they
//!     sit; here each one is read as a key, value, scalar or attribute and attached to the
//!     Document Tree.
//!
//! Reading a Section
//!
//!     1. Sequence items drop their leading `- `. A dash with no space after it is ordinary
//!        text, so `-4` stays a name.
//!     2. The content is split at the first `:`. The name is the trimmed text before it, the
//!        value the trimmed text after it. Without a colon the whole content is the name and
//!        the value is empty, except for sequence items, where it becomes a bare scalar value.
//!     3. A name starting with `_` is an attribute: it is stored, underscore stripped, on the
//!        node currently being built and the section's own children are ignored.
//!     4. Anything else becomes a node appended to the current parent, and the section's
//!        children are read with that node as their parent.
//!
//!     The synthetic root section never produces a node: its children attach straight to the
//!     result root, which is why top-level entries do not gain an extra nesting level.

use crate::lexing::strip_sequence_marker;
use crate::sections::{SectionId, SectionTree};
use crate::tree::{Node, NodeKind};

const ATTRIBUTE_PREFIX: char = '_';
const SEPARATOR: char = ':';

/// How a single section reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    Attribute { key: String, value: String },
    Node(NodeKind),
}

/// Split a section's text into name and value.
pub fn split_name_value(content: &str) -> (&str, &str) {
    match content.split_once(SEPARATOR) {
        Some((name, value)) => (name.trim(), value.trim()),
        None => (content.trim(), ""),
    }
}

/// Interpret one section's text.
pub fn read_section(content: &str, sequence_item: bool) -> SectionContent {
    let content = content.trim();
    let element = if sequence_item {
        strip_sequence_marker(content).map(str::trim)
    } else {
        None
    };

    let content = match element {
        Some(text) if !text.contains(SEPARATOR) => {
            return SectionContent::Node(NodeKind::infer("", text));
        }
        Some(text) => text,
        None => content,
    };

    let (name, value) = split_name_value(content);
    match name.strip_prefix(ATTRIBUTE_PREFIX) {
        Some(key) => SectionContent::Attribute {
            key: key.to_string(),
            value: value.to_string(),
        },
        None => SectionContent::Node(NodeKind::infer(name, value)),
    }
}

/// Convert a finished section tree into the children and attributes of `root`.
pub fn build_tree(sections: &SectionTree, root: &mut Node) {
    convert(sections, SectionId::ROOT, root, true);
}

fn convert(sections: &SectionTree, id: SectionId, parent: &mut Node, is_root: bool) {
    if is_root {
        for (child, _) in sections.children(id) {
            convert(sections, child, parent, false);
        }
        return;
    }

    let section = sections.get(id);
    match read_section(&section.content, section.sequence_item) {
        SectionContent::Attribute { key, value } => {
            parent.set_attribute(key, value);
        }
        SectionContent::Node(kind) => {
            let node = parent.add_child(Node::from_kind(kind));
            for (child, _) in sections.children(id) {
                convert(sections, child, node, false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SectionBuilder;

    #[test]
    fn test_split_name_value() {
        assert_eq!(split_name_value("name: hero"), ("name", "hero"));
        assert_eq!(split_name_value("name:hero"), ("name", "hero"));
        assert_eq!(split_name_value("stats:"), ("stats", ""));
        assert_eq!(split_name_value("justtext"), ("justtext", ""));
        assert_eq!(
            split_name_value("url: http://example.com"),
            ("url", "http://example.com")
        );
        assert_eq!(split_name_value("key :  spaced  "), ("key", "spaced"));
    }

    #[test]
    fn test_read_keyed_entry() {
        assert_eq!(
            read_section("hp: 10", false),
            SectionContent::Node(NodeKind::Entry {
                name: "hp".to_string(),
                value: "10".to_string()
            })
        );
    }

    #[test]
    fn test_read_attribute() {
        assert_eq!(
            read_section("_type: int", false),
            SectionContent::Attribute {
                key: "type".to_string(),
                value: "int".to_string()
            }
        );
        assert_eq!(
            read_section("_flag", false),
            SectionContent::Attribute {
                key: "flag".to_string(),
                value: String::new()
            }
        );
    }

    #[test]
    fn test_read_malformed_line_as_name() {
        assert_eq!(
            read_section("justtext", false),
            SectionContent::Node(NodeKind::Entry {
                name: "justtext".to_string(),
                value: String::new()
            })
        );
    }

    #[test]
    fn test_read_sequence_items() {
        assert_eq!(
            read_section("- sword", true),
            SectionContent::Node(NodeKind::Scalar {
                value: "sword".to_string()
            })
        );
        assert_eq!(
            read_section("- name: hero", true),
            SectionContent::Node(NodeKind::Entry {
                name: "name".to_string(),
                value: "hero".to_string()
            })
        );
        assert_eq!(
            read_section("-", true),
            SectionContent::Node(NodeKind::Container)
        );
    }

    #[test]
    fn test_leading_dash_without_space_is_kept() {
        assert_eq!(
            read_section("-4", false),
            SectionContent::Node(NodeKind::Entry {
                name: "-4".to_string(),
                value: String::new()
            })
        );
        // Even if the caller flags it, `-key` has no sequence marker to strip
        assert_eq!(
            read_section("-key: v", true),
            SectionContent::Node(NodeKind::Entry {
                name: "-key".to_string(),
                value: "v".to_string()
            })
        );
    }

    #[test]
    fn test_filler_becomes_container() {
        assert_eq!(read_section("", false), SectionContent::Node(NodeKind::Container));
    }

    #[test]
    fn test_build_tree_attaches_top_level_to_root() {
        let mut builder = SectionBuilder::new();
        builder.push_line("name: hero", 0, false);
        builder.push_line("stats:", 0, false);
        builder.push_line("hp: 10", 2, false);
        builder.push_line("_type: int", 2, false);
        let sections = builder.finish();

        let mut root = Node::container();
        build_tree(&sections, &mut root);

        assert_eq!(root.children().len(), 2);
        let stats = &root.children()[1];
        assert_eq!(stats.name(), "stats");
        assert_eq!(stats.children().len(), 1);
        assert_eq!(stats.attribute("type"), Some("int"));
    }

    #[test]
    fn test_attribute_children_are_skipped() {
        let mut builder = SectionBuilder::new();
        builder.push_line("_meta: x", 0, false);
        builder.push_line("ignored: 1", 2, false);
        let sections = builder.finish();

        let mut root = Node::container();
        build_tree(&sections, &mut root);

        assert!(root.children().is_empty());
        assert_eq!(root.attribute("meta"), Some("x"));
    }
}
