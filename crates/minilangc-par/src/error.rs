use minilangc_lex::TokenKind;
use minilangc_util::Span;
use thiserror::Error;

/// Syntax errors. Fatal at first detection — the parser does not attempt
/// panic-mode recovery, so a `ParseError` always means no AST is produced.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("expected {expected:?} but found {found:?} at {span}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },

    #[error("unexpected statement start: {found:?} at {span}")]
    UnexpectedStatement { found: TokenKind, span: Span },

    #[error("unexpected token {found:?} at {span}")]
    UnexpectedPrimary { found: TokenKind, span: Span },

    #[error("expected {expected:?} but reached end of input")]
    UnexpectedEof { expected: TokenKind },
}
