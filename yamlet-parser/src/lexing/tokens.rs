//! Token definitions for the yamlet line prefix
//!
//! Only the characters that matter for indentation scanning get their own token; everything
//! else is folded into `Text`.
use logos::Logos;

/// Tokens produced when scanning a line
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    #[token(" ")]
    Space,

    // Sequence marker, as in `- item`
    #[token("-")]
    SequenceMarker,

    #[token("#")]
    CommentMarker,

    // Text content (catch-all for non-special characters)
    #[regex(r"[^ #\-]+")]
    Text,
}

/// Tokenize a line, dropping anything logos could not match
pub fn tokenize(line: &str) -> Vec<Token> {
    Token::lexer(line)
        .filter_map(|result| result.ok())
        .collect()
}
