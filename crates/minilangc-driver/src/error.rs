use minilangc_util::Stage;
use thiserror::Error;

/// A failure from any pipeline stage, tagged with which stage produced
/// it. The driver stops at the first failing stage — later stages never
/// run against a malformed artifact.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("[{stage}] {message}")]
pub struct CompileError {
    pub stage: Stage,
    pub message: String,
}

impl From<minilangc_lex::LexError> for CompileError {
    fn from(err: minilangc_lex::LexError) -> Self {
        CompileError {
            stage: Stage::Lexical,
            message: err.to_string(),
        }
    }
}

impl From<minilangc_par::ParseError> for CompileError {
    fn from(err: minilangc_par::ParseError) -> Self {
        CompileError {
            stage: Stage::Syntactic,
            message: err.to_string(),
        }
    }
}

impl From<minilangc_sem::SemanticError> for CompileError {
    fn from(err: minilangc_sem::SemanticError) -> Self {
        CompileError {
            stage: Stage::Semantic,
            message: err.to_string(),
        }
    }
}
