use minilangc_util::Span;
use thiserror::Error;

/// Lexical errors. Fatal to the lexer stage — no partial token stream is
/// returned once one of these is produced.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LexError {
    #[error("unrecognized character '{ch}' at {span}")]
    UnrecognizedChar { ch: char, span: Span },

    #[error("malformed number literal '{text}' at {span}")]
    MalformedNumber { text: String, span: Span },
}
