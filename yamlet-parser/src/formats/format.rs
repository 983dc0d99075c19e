//! The [Format] trait
//!
//! A format names one textual view of a Document Tree. Most views here are write-only: the
//! json and treeviz outputs exist to look at a decoded tree, and only yamlet reads text back.
//! A format declares its directions through `supports_parsing` / `supports_serialization`,
//! and the registry checks them before dispatching.

use crate::error::FormatError;
use crate::tree::Node;

/// One textual view of a Document Tree
///
/// Only `name` is required. A format that leaves `parse` or `serialize` alone answers with
/// [FormatError::NotSupported].
///
/// ```ignore
/// struct NodeCount;
///
/// impl Format for NodeCount {
///     fn name(&self) -> &str {
///         "count"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, root: &Node) -> Result<String, FormatError> {
///         Ok(root.node_count().to_string())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// Registry key and `--format` value, e.g. "yamlet"
    fn name(&self) -> &str;

    /// One line for `--list-formats`
    fn description(&self) -> &str {
        ""
    }

    /// Text → tree
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Tree → text
    fn supports_serialization(&self) -> bool {
        false
    }

    fn parse(&self, _source: &str) -> Result<Node, FormatError> {
        Err(unsupported(self.name(), "parsing"))
    }

    fn serialize(&self, _root: &Node) -> Result<String, FormatError> {
        Err(unsupported(self.name(), "serialization"))
    }
}

pub(crate) fn unsupported(name: &str, direction: &str) -> FormatError {
    FormatError::NotSupported(format!("Format '{}' does not support {}", name, direction))
}
