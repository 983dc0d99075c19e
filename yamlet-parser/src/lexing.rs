//! Lexer
//!
//!     yamlet is line oriented: every physical line is one unit, and the only thing the reader
//!     needs to know before building structure is what kind of line it is and how deep it sits.
//!     Lexing therefore runs per line and produces a [Line], never a token stream for the
//!     whole document.
//!
//! Prefix Scanning
//!
//!     The leading characters of a line are tokenized with logos (see [tokens]) and scanned
//!     left to right:
//!         - each space adds 1 to the indentation;
//!         - a dash adds 2 and ends the scan, so `- a` at column 0 sits at indentation 2;
//!           the line is a sequence element only when the dash is followed by a space (or
//!           stands alone), so `-4` is plain content;
//!         - a comment marker (`#`) ends the scan and turns the whole line into a comment;
//!         - anything else ends the scan.
//!
//!     Indentation is kept in absolute units (2 per level). Odd values are legal on read and
//!     are resolved by integer division when levels are compared.
//!
//! Line Kinds
//!
//!     See [LineKind]. The document start marker and comments are dropped without touching
//!     the indentation cursor. Every other line, a blank one included, is content and reaches
//!     the section builder; a blank line becomes a section with no text.

pub mod line_classification;
pub mod tokens;

pub use line_classification::{
    classify_line, strip_sequence_marker, Line, LineKind, DOCUMENT_START, SEQUENCE_MARKER,
};
pub use tokens::{tokenize, Token};
