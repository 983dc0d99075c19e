//! Treeviz formatter for Document Trees
//!
//! Treeviz is a one-line-per-node rendering of a tree, meant for quickly eyeballing what a
//! document decoded into. Nesting is drawn with box connectors, two columns per level.
//!
//! So the format is :
//! <prefix><connector> <icon> <label> (truncated)
//!
//! Example:
//!
//! ⧉ 2 children
//! ├─ ≔ name: hero
//! └─ ≔ stats
//!   │ @ type=int
//!   └─ ≔ hp: 10
//!
//! Icons
//!     Container: ⧉
//!     Entry: ≔
//!     Scalar: •
//!     Attribute: @

use crate::error::FormatError;
use crate::formats::format::Format;
use crate::tree::{snapshot_node, Node, NodeSnapshot};

/// Rendering knobs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreevizOptions {
    /// Labels longer than this are cut and suffixed with "..."
    pub max_label_chars: usize,
    pub show_attributes: bool,
}

impl Default for TreevizOptions {
    fn default() -> Self {
        Self {
            max_label_chars: 30,
            show_attributes: true,
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Container" => "⧉",
        "Entry" => "≔",
        "Scalar" => "•",
        _ => "○",
    }
}

fn format_attributes(
    snapshot: &NodeSnapshot,
    prefix: &str,
    options: &TreevizOptions,
    output: &mut String,
) {
    if !options.show_attributes {
        return;
    }
    for (key, value) in &snapshot.attributes {
        let label = truncate(&format!("{}={}", key, value), options.max_label_chars);
        output.push_str(&format!("{}│ @ {}\n", prefix, label));
    }
}

fn format_snapshot(
    snapshot: &NodeSnapshot,
    prefix: &str,
    is_last: bool,
    options: &TreevizOptions,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    let icon = get_icon(&snapshot.node_type);
    let label = truncate(&snapshot.label, options.max_label_chars);
    output.push_str(&format!("{}{} {} {}\n", prefix, connector, icon, label));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_attributes(snapshot, &child_prefix, options, output);

    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, &child_prefix, i == child_count - 1, options, output);
    }
}

/// Render a tree with explicit options
pub fn to_treeviz_str_with_options(root: &Node, options: &TreevizOptions) -> String {
    let snapshot = snapshot_node(root);
    let icon = get_icon(&snapshot.node_type);
    let mut output = format!(
        "{} {}\n",
        icon,
        truncate(&snapshot.label, options.max_label_chars)
    );

    format_attributes(&snapshot, "", options, &mut output);
    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, "", i == child_count - 1, options, &mut output);
    }

    output
}

pub fn to_treeviz_str(root: &Node) -> String {
    to_treeviz_str_with_options(root, &TreevizOptions::default())
}

/// Formatter implementation for treeviz format
#[derive(Debug, Clone, Default)]
pub struct TreevizFormat {
    options: TreevizOptions,
}

impl TreevizFormat {
    pub fn new(options: TreevizOptions) -> Self {
        Self { options }
    }
}

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with box connectors and icons"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, root: &Node) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_options(root, &self.options))
    }
}
