//! minilangc-par - Syntax Analyzer
//!
//! Builds an AST from a token stream. The grammar is recursive descent,
//! one function per named production (`Comparison`, `Term`, `Factor`,
//! `Unary`, `Primary`), so precedence and associativity fall directly out
//! of the call structure rather than an operator-precedence table.

mod ast;
mod error;
mod parser;

pub use ast::{BinOp, Expr, Program, Stmt, UnOp};
pub use error::ParseError;
pub use parser::Parser;

/// Parses a complete token stream (must end with exactly one `Eof`) into
/// a `Program`.
pub fn parse(tokens: Vec<minilangc_lex::Token>) -> Result<Program, ParseError> {
    minilangc_util::trace_stage(
        minilangc_util::Stage::Syntactic,
        &format!("parsing {} tokens", tokens.len()),
    );
    let program = Parser::new(tokens).parse()?;
    minilangc_util::trace_stage(
        minilangc_util::Stage::Syntactic,
        &format!("produced {} statements", program.statements.len()),
    );
    Ok(program)
}
