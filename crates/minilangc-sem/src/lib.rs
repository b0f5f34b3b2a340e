//! minilangc-sem - Semantic Analyzer + Symbol Table
//!
//! Walks an AST once, in source order, checking declaration-before-use,
//! redeclaration, and numeric-operand rules while building a flat,
//! insertion-ordered symbol table. Unlike a block-structured language's
//! scope stack, MiniLang has a single namespace for the whole program, so
//! there is no scope-tree machinery here to mirror.

mod analyzer;
mod error;
mod symbol;

pub use analyzer::SemanticAnalyzer;
pub use error::SemanticError;
pub use symbol::{DataType, Symbol, SymbolKind, SymbolTable};

/// Analyzes `program`, returning the populated symbol table and any
/// warnings on success, or an aggregate `SemanticError` on failure.
pub fn analyze(
    program: &minilangc_par::Program,
) -> Result<(SymbolTable, Vec<String>), SemanticError> {
    minilangc_util::trace_stage(
        minilangc_util::Stage::Semantic,
        &format!("analyzing {} statements", program.statements.len()),
    );
    let result = SemanticAnalyzer::new().analyze(program);
    match &result {
        Ok((table, warnings)) => minilangc_util::trace_stage(
            minilangc_util::Stage::Semantic,
            &format!(
                "analysis ok: {} symbols, {} warnings",
                table.all_symbols().len(),
                warnings.len()
            ),
        ),
        Err(_) => minilangc_util::trace_stage(minilangc_util::Stage::Semantic, "analysis failed"),
    }
    result
}
