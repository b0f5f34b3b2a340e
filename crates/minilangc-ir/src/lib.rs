//! minilangc-ir - IR Generator
//!
//! Lowers an AST into a flat three-address-code listing: a `Vec` of
//! `Instruction`, addressed by `GOTO`/`IF_FALSE` jumps to `LABEL`
//! markers rather than a control-flow graph of basic blocks. Label and
//! temporary suffixes are allocated in traversal order and are part of
//! the observable output.

mod builder;
mod generator;
mod instruction;
mod operand;

pub use builder::IrBuilder;
pub use generator::IrGenerator;
pub use instruction::{Instruction, Op};
pub use operand::Operand;

/// Generates the three-address instruction listing for `program`.
pub fn generate(program: &minilangc_par::Program) -> Vec<Instruction> {
    minilangc_util::trace_stage(
        minilangc_util::Stage::Semantic,
        &format!("lowering {} statements to IR", program.statements.len()),
    );
    let ir = IrGenerator::new().generate(program);
    minilangc_util::trace_stage(
        minilangc_util::Stage::Semantic,
        &format!("emitted {} instructions", ir.len()),
    );
    ir
}

#[cfg(test)]
mod tests {
    use super::*;
    use minilangc_lex::tokenize;

    fn ir_text(source: &str) -> Vec<String> {
        let tokens = tokenize(source).unwrap();
        let program = minilangc_par::parse(tokens).unwrap();
        generate(&program).iter().map(|i| i.to_string()).collect()
    }

    #[test]
    fn empty_program_yields_no_instructions() {
        let program = minilangc_par::parse(tokenize("").unwrap()).unwrap();
        assert!(generate(&program).is_empty());
    }

    #[test]
    fn straight_line_assignment_and_print() {
        assert_eq!(
            ir_text("var x; var y; x = 10; y = 20; var s; s = x + y; print(s);"),
            vec!["x = 10", "y = 20", "t0 = x + y", "s = t0", "print s",]
        );
    }

    #[test]
    fn if_else_lowers_with_else_and_end_labels() {
        assert_eq!(
            ir_text("var a; a = 1; if (a > 0) { print(1); } else { print(0); }"),
            vec![
                "a = 1",
                "t0 = a > 0",
                "if_false t0 goto L0",
                "print 1",
                "goto L1",
                "L0:",
                "print 0",
                "L1:",
            ]
        );
    }

    #[test]
    fn while_loop_lowers_with_start_and_end_labels() {
        assert_eq!(
            ir_text("var i; i = 0; while (i < 3) { print(i); i = i + 1; }"),
            vec![
                "i = 0",
                "L0:",
                "t0 = i < 3",
                "if_false t0 goto L1",
                "print i",
                "t1 = i + 1",
                "i = t1",
                "goto L0",
                "L1:",
            ]
        );
    }

    #[test]
    fn unary_binds_tighter_than_multiplicative_which_binds_looser_than_neither() {
        assert_eq!(
            ir_text("var a; a = -(1 + 2) * 3;"),
            vec!["t0 = 1 + 2", "t1 = -t0", "t2 = t1 * 3", "a = t2",]
        );
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(
            ir_text("var a; a = 1 - 2 - 3;"),
            vec!["t0 = 1 - 2", "t1 = t0 - 3", "a = t1"]
        );
    }

    #[test]
    fn if_without_else_still_emits_goto_before_the_else_label() {
        let text = ir_text("var a; a = 1; if (a > 0) { print(1); }");
        // Intentional: the GOTO to Lend is emitted even with no else
        // block, landing immediately before LABEL Lelse.
        let goto_index = text.iter().position(|t| t == "goto L1").unwrap();
        let label_else_index = text.iter().position(|t| t == "L0:").unwrap();
        assert_eq!(goto_index + 1, label_else_index);
    }

    #[test]
    fn labels_and_temps_are_allocated_in_strictly_increasing_order() {
        let text = ir_text("var i; i = 0; while (i < 3) { i = i + 1; }");
        assert!(text.iter().any(|t| t.contains("t0")));
        assert!(text.iter().any(|t| t.contains("t1")));
        assert!(text.iter().any(|t| t.contains("L0")));
        assert!(text.iter().any(|t| t.contains("L1")));
    }
}
