//! Line Classification
//!
//! Determines what a physical line is and, for content lines, how deep it is indented.
use super::tokens::Token;
use logos::Logos;

/// The literal start-of-document marker line.
pub const DOCUMENT_START: &str = "---";

/// Prefix of a sequence element: a dash followed by a space.
pub const SEQUENCE_MARKER: &str = "- ";

/// What a line contributes to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Exactly `---`
    DocumentStart,
    /// First non-space character is `#`
    Comment,
    /// Anything else, blank lines included. `indentation` is in absolute units (2 per level);
    /// `sequence_item` is set when the line opens with a sequence marker.
    Content {
        indentation: usize,
        sequence_item: bool,
    },
}

/// A classified line, borrowing its trimmed content from the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub kind: LineKind,
    pub content: &'a str,
}

impl Line<'_> {
    pub fn is_content(&self) -> bool {
        matches!(self.kind, LineKind::Content { .. })
    }
}

/// The text after a leading sequence marker, or `None` when `content` is not a sequence
/// element. A lone `-` is an element with no text.
pub fn strip_sequence_marker(content: &str) -> Option<&str> {
    if content == SEQUENCE_MARKER.trim_end() {
        return Some("");
    }
    content.strip_prefix(SEQUENCE_MARKER)
}

/// Classify a raw line (without its line terminator; a trailing `\r` is tolerated).
///
/// Blank and whitespace-only lines are content lines with empty content; they still move
/// the indentation cursor.
pub fn classify_line(raw: &str) -> Line<'_> {
    let line = raw.strip_suffix('\r').unwrap_or(raw);
    if line == DOCUMENT_START {
        return Line {
            kind: LineKind::DocumentStart,
            content: line,
        };
    }

    let content = line.trim();
    let mut indentation = 0;
    let mut sequence_item = false;
    for result in Token::lexer(line) {
        match result {
            Ok(Token::Space) => indentation += 1,
            Ok(Token::SequenceMarker) => {
                // A dash always counts as one level; only `- ` makes the line an element
                indentation += 2;
                sequence_item = strip_sequence_marker(content).is_some();
                break;
            }
            Ok(Token::CommentMarker) => {
                return Line {
                    kind: LineKind::Comment,
                    content,
                };
            }
            Ok(Token::Text) | Err(_) => break,
        }
    }

    Line {
        kind: LineKind::Content {
            indentation,
            sequence_item,
        },
        content,
    }
}
