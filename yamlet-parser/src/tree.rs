//! Document Tree
//!
//!     The Document Tree is the generic labeled tree every yamlet document decodes into, and the
//!     shape the writer serializes back to text. It carries no parse metadata at all: once a
//!     document is decoded, nothing about indentation or markers survives, and the writer must
//!     reconstruct them from the tree alone.
//!
//!     A node has a role, ordered children and ordered attributes:
//!
//!         Container            neither name nor value (the root, list wrappers, fillers)
//!         Scalar(value)        a bare value, used for sequence elements
//!         Entry(name, value)   a keyed entry; the value may be empty when the entry has children
//!
//!     In text the role is implied by which of name and value are empty. Here it is an explicit
//!     [NodeKind] so code consuming the tree never has to guess, while [Node::new] keeps the
//!     text-level inference for callers that only have the two strings.
//!
//! Ownership
//!
//!     Every node exclusively owns its children. There are no parent pointers and no sharing,
//!     so a tree can never contain a cycle and dropping a node drops its whole subtree.

pub mod node;
pub mod snapshot;

pub use node::{Attributes, Node, NodeKind};
pub use snapshot::{snapshot_node, NodeSnapshot};
