//! yamlet serializer
//!
//!     Writes a Document Tree back to indented text. Nothing about the original layout is
//!     stored in the tree, so indentation, sequence markers and attribute lines are all
//!     derived from node roles:
//!
//!         ---                       always the first line
//!         name: value               keyed entry
//!         name:                     keyed entry without a value (written as `name: `)
//!         value                     scalar
//!         - value                   scalar or entry whose parent is a list
//!           _key: value             attribute, one level below its node
//!
//!     Entries open a nesting level for their children; containers and scalars do not.
//!
//! Lists
//!
//!     A parent counts as a list when it has no value and its first child has no name. Each of
//!     its children is then prefixed with `- `, taking the place of the last indent step.
//!
//! Containers
//!
//!     A container below the root writes no text of its own. When it has children and no
//!     attributes its indent prefix stays open and its first child continues on that line;
//!     otherwise the prefix line is closed right away (and dropped if it holds nothing but
//!     spaces). The marker only ever replaces indent spaces this serializer wrote itself, so a
//!     container inside a list yields `- - value` rather than clobbering earlier output.

use crate::error::FormatError;
use crate::formats::format::Format;
use crate::lexing::{DOCUMENT_START, SEQUENCE_MARKER};
use crate::tree::{Node, NodeKind};
use tracing::debug;

const INDENT: &str = "  ";
const ATTRIBUTE_PREFIX: &str = "_";

pub struct YamletSerializer {
    output: String,
    /// An indent prefix has been written but its line not yet filled
    open_prefix: bool,
}

impl YamletSerializer {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            open_prefix: false,
        }
    }

    pub fn serialize(mut self, root: &Node) -> String {
        self.output.push_str(DOCUMENT_START);
        self.output.push('\n');
        self.append_node(root, None, 0);
        debug!(
            nodes = root.node_count(),
            bytes = self.output.len(),
            "encoded document"
        );
        self.output
    }

    fn indent(depth: usize) -> String {
        INDENT.repeat(depth)
    }

    fn is_list(parent: &Node) -> bool {
        parent.value().is_empty()
            && parent
                .children()
                .first()
                .is_some_and(|first| first.name().is_empty())
    }

    fn write_prefix(&mut self, parent: &Node, depth: usize) {
        if self.open_prefix {
            self.open_prefix = false;
        } else {
            self.output.push_str(&Self::indent(depth));
        }

        if Self::is_list(parent) {
            if self.output.ends_with(INDENT) {
                self.output.truncate(self.output.len() - INDENT.len());
            }
            self.output.push_str(SEQUENCE_MARKER);
        }
    }

    /// Terminate a line that only holds a prefix.
    fn close_prefix_line(&mut self) {
        let line_start = self.output.rfind('\n').map_or(0, |i| i + 1);
        if self.output[line_start..].trim().is_empty() {
            self.output.truncate(line_start);
        } else {
            self.output.push('\n');
        }
    }

    fn append_node(&mut self, node: &Node, parent: Option<&Node>, depth: usize) {
        if let Some(parent) = parent {
            self.write_prefix(parent, depth);
        }

        match node.kind() {
            NodeKind::Entry { name, value } => {
                self.output.push_str(name);
                self.output.push_str(": ");
                self.output.push_str(value);
                self.output.push('\n');
            }
            NodeKind::Scalar { value } => {
                self.output.push_str(value);
                self.output.push('\n');
            }
            NodeKind::Container if parent.is_some() => {
                if node.children().is_empty() || !node.attributes().is_empty() {
                    self.close_prefix_line();
                } else {
                    self.open_prefix = true;
                }
            }
            NodeKind::Container => {}
        }

        let indent = Self::indent(depth);
        for (key, value) in node.attributes() {
            self.output.push_str(&indent);
            self.output.push_str(INDENT);
            self.output.push_str(ATTRIBUTE_PREFIX);
            self.output.push_str(key);
            self.output.push_str(": ");
            self.output.push_str(value);
            self.output.push('\n');
        }

        let child_depth = if node.name().is_empty() {
            depth
        } else {
            depth + 1
        };
        for child in node.children() {
            self.append_node(child, Some(node), child_depth);
        }
    }
}

impl Default for YamletSerializer {
    fn default() -> Self {
        Self::new()
    }
}

/// The yamlet format for the [registry](crate::formats::FormatRegistry)
pub struct YamletFormat;

impl Format for YamletFormat {
    fn name(&self) -> &str {
        "yamlet"
    }

    fn description(&self) -> &str {
        "Indented key/value documents with attributes and sequences"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        Ok(crate::codec::decode_str(source))
    }

    fn serialize(&self, root: &Node) -> Result<String, FormatError> {
        Ok(YamletSerializer::new().serialize(root))
    }
}
