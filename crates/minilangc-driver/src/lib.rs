//! minilangc-driver - Pipeline Driver
//!
//! Sequences Lexer → Parser → Semantic Analyzer → IR Generator over a
//! single source string. Single-threaded and synchronous: no stage
//! blocks, suspends, or performs I/O, and each `compile` call starts
//! with fresh stage state, so independent calls never share mutable
//! resources.

mod error;
mod output;

pub use error::CompileError;
pub use output::CompileOutput;

/// Runs the full pipeline over `source`. Stops at the first failing
/// stage, returning an error tagged with that stage's kind.
pub fn compile(source: &str) -> Result<CompileOutput, CompileError> {
    let tokens = minilangc_lex::tokenize(source)?;
    let ast = minilangc_par::parse(tokens.clone())?;
    let (symbol_table, warnings) = minilangc_sem::analyze(&ast)?;
    let ir = minilangc_ir::generate(&ast);

    Ok(CompileOutput {
        tokens,
        ast,
        symbol_table,
        ir,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use minilangc_util::Stage;

    fn ir_text(output: &CompileOutput) -> Vec<String> {
        output.ir.iter().map(|i| i.to_string()).collect()
    }

    #[test]
    fn empty_source_compiles_to_nothing() {
        let output = compile("").unwrap();
        assert!(output.ast.statements.is_empty());
        assert!(output.ir.is_empty());
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn comment_and_whitespace_only_source_is_the_same_as_empty() {
        let output = compile("  // just a comment\n  \n").unwrap();
        assert!(output.ast.statements.is_empty());
        assert!(output.ir.is_empty());
    }

    #[test]
    fn malformed_number_is_a_lexical_stage_error() {
        let err = compile("var x; x = 3.14.5;").unwrap_err();
        assert_eq!(err.stage, Stage::Lexical);
    }

    #[test]
    fn missing_semicolon_is_a_syntactic_stage_error() {
        let err = compile("var x").unwrap_err();
        assert_eq!(err.stage, Stage::Syntactic);
    }

    #[test]
    fn double_declaration_is_a_semantic_stage_error_citing_both_lines() {
        let err = compile("var x;\nvar x;").unwrap_err();
        assert_eq!(err.stage, Stage::Semantic);
        assert!(err.message.contains('1'));
        assert!(err.message.contains('2'));
    }

    #[test]
    fn assignment_without_declaration_is_a_semantic_stage_error() {
        let err = compile("y = 1;").unwrap_err();
        assert_eq!(err.stage, Stage::Semantic);
        assert!(err.message.contains('y'));
        assert!(err.message.contains('1'));
    }

    #[test]
    fn scenario_straight_line_arithmetic_and_print() {
        let output = compile("var x; var y; x = 10; y = 20; var s; s = x + y; print(s);").unwrap();
        assert_eq!(
            ir_text(&output),
            vec!["x = 10", "y = 20", "t0 = x + y", "s = t0", "print s"]
        );
    }

    #[test]
    fn scenario_declared_but_unused_compiles_with_a_warning() {
        let output = compile("var x; x = 1;").unwrap();
        assert!(output.warnings.iter().any(|w| w.contains("never used")));
    }

    #[test]
    fn scenario_read_before_assignment_compiles_with_a_warning() {
        let output = compile("var x; print(x);").unwrap();
        assert!(output
            .warnings
            .iter()
            .any(|w| w.contains("may not be initialized")));
    }

    #[test]
    fn repeated_compiles_of_the_same_source_are_deterministic() {
        let first = compile("var a; a = 1; if (a > 0) { print(1); } else { print(0); }").unwrap();
        let second = compile("var a; a = 1; if (a > 0) { print(1); } else { print(0); }").unwrap();
        assert_eq!(ir_text(&first), ir_text(&second));
    }
}
