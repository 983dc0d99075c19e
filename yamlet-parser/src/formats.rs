//! Output and input formats
//!
//!     A [Format] converts between text and a Document Tree in one or both directions. The
//!     yamlet format itself is the only one that parses; the others exist to inspect a tree.
//!
//!         yamlet    parse + serialize   the indented document format
//!         json      serialize           the node snapshot as JSON
//!         treeviz   serialize           one line per node, box-drawing connectors
//!
//!     Formats are looked up by name through a [FormatRegistry].

pub mod format;
pub mod json;
pub mod registry;
pub mod treeviz;
pub mod yamlet;

pub use format::Format;
pub use json::JsonFormat;
pub use registry::FormatRegistry;
pub use treeviz::{to_treeviz_str, TreevizFormat, TreevizOptions};
pub use yamlet::{YamletFormat, YamletSerializer};
