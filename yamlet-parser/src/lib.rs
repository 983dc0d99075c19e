//! # yamlet-parser
//!
//! Reader and writer for yamlet, an indentation based document format (a small, strict
//! subset of YAML with attributes):
//!
//! ```text
//! ---
//! name: hero
//! stats:
//!   _type: int
//!   hp: 10
//! items:
//! - sword
//! - shield
//! ```
//!
//! File Layout
//!
//!     tree         the Document Tree every document decodes into
//!     lexing       per-line classification and indentation scanning
//!     sections     the raw line hierarchy and the indentation state machine
//!     building     Section tree → Document Tree
//!     codec        decode / encode entry points
//!     formats      serializers (yamlet, json, treeviz) and the format registry
//!     loader       reading and writing documents on disk
//!     testing      fluent tree assertions and verified sample documents
//!
//! For the testing rules, see the [testing module](testing).

pub mod building;
pub mod codec;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod sections;
pub mod testing;
pub mod tree;

pub use codec::{decode, decode_str, encode, encode_to_string, load_into, Decoder};
pub use error::{CodecError, FormatError, LoaderError};
pub use tree::{Attributes, Node, NodeKind};
