use minilangc_lex::Number;
use minilangc_par::{Expr, Program, Stmt, UnOp};

use crate::builder::IrBuilder;
use crate::instruction::{Instruction, Op};
use crate::operand::Operand;

/// Lowers a `Program` into a flat list of three-address instructions.
/// A second, independent traversal of the same AST the analyzer walked;
/// it assumes the program already passed semantic analysis and does not
/// re-check anything.
pub struct IrGenerator {
    builder: IrBuilder,
}

impl IrGenerator {
    pub fn new() -> Self {
        Self {
            builder: IrBuilder::new(),
        }
    }

    pub fn generate(mut self, program: &Program) -> Vec<Instruction> {
        for stmt in &program.statements {
            self.lower_stmt(stmt);
        }
        self.builder.finish()
    }

    fn lower_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VarDeclaration { .. } => {}
            Stmt::Assignment { target, expr, .. } => {
                let value = self.lower_expr(expr);
                self.builder
                    .emit(Instruction::assign(value, Operand::Name(target.clone())));
            }
            Stmt::If {
                condition,
                then_block,
                else_block,
                ..
            } => {
                let label_else = self.builder.new_label();
                let label_end = self.builder.new_label();

                let cond = self.lower_expr(condition);
                self.builder
                    .emit(Instruction::if_false(cond, label_else.clone()));
                for stmt in then_block {
                    self.lower_stmt(stmt);
                }
                self.builder.emit(Instruction::goto(label_end.clone()));
                self.builder.emit(Instruction::label(label_else));
                if let Some(else_block) = else_block {
                    for stmt in else_block {
                        self.lower_stmt(stmt);
                    }
                }
                self.builder.emit(Instruction::label(label_end));
            }
            Stmt::While {
                condition, body, ..
            } => {
                let label_start = self.builder.new_label();
                let label_end = self.builder.new_label();

                self.builder.emit(Instruction::label(label_start.clone()));
                let cond = self.lower_expr(condition);
                self.builder
                    .emit(Instruction::if_false(cond, label_end.clone()));
                for stmt in body {
                    self.lower_stmt(stmt);
                }
                self.builder.emit(Instruction::goto(label_start));
                self.builder.emit(Instruction::label(label_end));
            }
            Stmt::Print { expr, .. } => {
                let value = self.lower_expr(expr);
                self.builder.emit(Instruction::print(value));
            }
        }
    }

    fn lower_expr(&mut self, expr: &Expr) -> Operand {
        match expr {
            Expr::Number { value, .. } => match value {
                Number::Int(n) => Operand::IntLit(*n),
                Number::Float(n) => Operand::FloatLit(*n),
            },
            Expr::Identifier { name, .. } => Operand::Name(name.clone()),
            Expr::Unary { op, operand, .. } => {
                let value = self.lower_expr(operand);
                let result = self.builder.new_temp();
                let op = match op {
                    UnOp::Plus => Op::UnaryPlus,
                    UnOp::Neg => Op::UnaryMinus,
                };
                self.builder
                    .emit(Instruction::unary(op, value, result.clone()));
                result
            }
            Expr::Binary {
                op, left, right, ..
            } => {
                let left = self.lower_expr(left);
                let right = self.lower_expr(right);
                let result = self.builder.new_temp();
                self.builder
                    .emit(Instruction::binary(*op, left, right, result.clone()));
                result
            }
        }
    }
}

impl Default for IrGenerator {
    fn default() -> Self {
        Self::new()
    }
}
