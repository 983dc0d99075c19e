//! Codec: the public read/write boundary
//!
//!     Everything outside this crate talks to documents through four calls:
//!
//!         decode / decode_str        text → Document Tree
//!         encode / encode_to_string  Document Tree → text
//!
//!     Decoding runs in two phases. Lines are classified ([lexing](crate::lexing)) and placed
//!     into a Section tree by indentation alone ([sections](crate::sections)); the finished
//!     Section tree is then read into a Document Tree ([building](crate::building)). Encoding
//!     is a single recursive pass ([formats::yamlet](crate::formats::yamlet)).
//!
//! Failure Policy
//!
//!     The reader never rejects input. Lines without a separator become name-only entries,
//!     misaligned indentation is resolved by integer division, and an empty stream is an empty
//!     root. Only the underlying stream can fail, which is what [CodecError] reports. Callers
//!     that need a particular shape validate the resulting tree themselves.

use crate::building::build_tree;
use crate::error::CodecError;
use crate::formats::yamlet::YamletSerializer;
use crate::lexing::{classify_line, LineKind};
use crate::sections::{SectionBuilder, SectionTree};
use crate::tree::Node;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

/// Incremental decoder: feed lines, then build the tree.
#[derive(Debug, Default)]
pub struct Decoder {
    sections: SectionBuilder,
    lines_read: usize,
    lines_skipped: usize,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one line and place it in the section tree.
    pub fn feed_line(&mut self, raw: &str) {
        self.lines_read += 1;
        let line = classify_line(raw);
        match line.kind {
            LineKind::Content {
                indentation,
                sequence_item,
            } => {
                self.sections
                    .push_line(line.content, indentation, sequence_item);
            }
            LineKind::DocumentStart | LineKind::Comment => {
                trace!(line = self.lines_read, kind = ?line.kind, "skipped line");
                self.lines_skipped += 1;
            }
        }
    }

    /// The raw line hierarchy built so far
    pub fn sections(&self) -> &SectionTree {
        self.sections.tree()
    }

    /// Finish reading and fill `root` from the collected sections.
    pub fn finish_into(self, root: &mut Node) {
        let sections = self.sections.finish();
        build_tree(&sections, root);
        debug!(
            lines = self.lines_read,
            skipped = self.lines_skipped,
            sections = sections.len() - 1,
            nodes = root.node_count() - 1,
            "decoded document"
        );
    }

    pub fn finish(self) -> Node {
        let mut root = Node::container();
        self.finish_into(&mut root);
        root
    }
}

/// Decode a document held in memory.
pub fn decode_str(source: &str) -> Node {
    let mut decoder = Decoder::new();
    for line in source.lines() {
        decoder.feed_line(line);
    }
    decoder.finish()
}

/// Decode a document from a buffered reader.
pub fn decode<R: BufRead>(reader: R) -> Result<Node, CodecError> {
    let mut root = Node::container();
    load_into(&mut root, reader)?;
    Ok(root)
}

/// Replace the contents of an existing root with a document read from `reader`.
///
/// Children and attributes are cleared first, so the root keeps only what the stream holds.
/// On error the root is left cleared.
pub fn load_into<R: BufRead>(root: &mut Node, reader: R) -> Result<(), CodecError> {
    root.clear_children();
    root.clear_attributes();

    let mut decoder = Decoder::new();
    for line in reader.lines() {
        decoder.feed_line(&line?);
    }
    decoder.finish_into(root);
    Ok(())
}

/// Encode a tree to a string.
pub fn encode_to_string(root: &Node) -> String {
    YamletSerializer::new().serialize(root)
}

/// Encode a tree to a writer.
pub fn encode<W: Write>(root: &Node, mut writer: W) -> Result<(), CodecError> {
    let text = encode_to_string(root);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}
