use minilangc_lex::Number;
use minilangc_par::{Expr, Program, Stmt, UnOp};

use crate::error::SemanticError;
use crate::symbol::{DataType, SymbolKind, SymbolTable};

/// Walks a `Program` once, in source order, populating a `SymbolTable`
/// and collecting error/warning messages as it goes. Errors don't stop
/// the walk — everything wrong with the program is reported together.
pub struct SemanticAnalyzer {
    table: SymbolTable,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self {
            table: SymbolTable::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Runs the analysis, returning the populated table and accumulated
    /// warnings on success, or a single aggregate `SemanticError` if any
    /// errors were collected.
    pub fn analyze(
        mut self,
        program: &Program,
    ) -> Result<(SymbolTable, Vec<String>), SemanticError> {
        for stmt in &program.statements {
            self.visit_stmt(stmt);
        }
        if !self.errors.is_empty() {
            return Err(SemanticError::aggregate(self.errors));
        }
        self.warnings.extend(self.table.warnings());
        Ok((self.table, self.warnings))
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VarDeclaration { name, line } => {
                if let Err(first_line) = self.table.declare(name, SymbolKind::Variable, *line) {
                    self.errors.push(
                        SemanticError::Redeclaration {
                            name: name.clone(),
                            line: *line,
                            first_line,
                        }
                        .to_string(),
                    );
                }
            }
            Stmt::Assignment { target, expr, line } => {
                let value_type = self.visit_expr(expr);
                if !self.table.exists(target) {
                    self.errors.push(
                        SemanticError::UndeclaredIdentifier {
                            name: target.clone(),
                            line: *line,
                        }
                        .to_string(),
                    );
                } else {
                    self.table.update_value(target, value_type);
                }
            }
            Stmt::If {
                condition,
                then_block,
                else_block,
                ..
            } => {
                self.visit_expr(condition);
                for stmt in then_block {
                    self.visit_stmt(stmt);
                }
                if let Some(else_block) = else_block {
                    for stmt in else_block {
                        self.visit_stmt(stmt);
                    }
                }
            }
            Stmt::While {
                condition, body, ..
            } => {
                self.visit_expr(condition);
                for stmt in body {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::Print { expr, .. } => {
                self.visit_expr(expr);
            }
        }
    }

    fn visit_expr(&mut self, expr: &Expr) -> DataType {
        match expr {
            Expr::Number { value, .. } => match value {
                Number::Int(_) => DataType::Int,
                Number::Float(_) => DataType::Float,
            },
            Expr::Identifier { name, line } => {
                if !self.table.exists(name) {
                    self.errors.push(
                        SemanticError::UndeclaredIdentifier {
                            name: name.clone(),
                            line: *line,
                        }
                        .to_string(),
                    );
                    return DataType::Unknown;
                }
                self.table.mark_used(name);
                let symbol = self.table.lookup(name).unwrap();
                if !symbol.initialized {
                    self.warnings
                        .push(format!("variable '{name}' may not be initialized"));
                }
                symbol.data_type
            }
            Expr::Unary { op, operand, line } => {
                let operand_type = self.visit_expr(operand);
                if !operand_type.is_numeric() {
                    self.errors.push(
                        SemanticError::NonNumericOperand {
                            op: op.symbol().to_string(),
                            line: *line,
                        }
                        .to_string(),
                    );
                    return DataType::Unknown;
                }
                match op {
                    UnOp::Plus | UnOp::Neg => operand_type,
                }
            }
            Expr::Binary {
                op,
                left,
                right,
                line,
            } => {
                let left_type = self.visit_expr(left);
                let right_type = self.visit_expr(right);
                if !left_type.is_numeric() || !right_type.is_numeric() {
                    self.errors.push(
                        SemanticError::NonNumericOperand {
                            op: op.symbol().to_string(),
                            line: *line,
                        }
                        .to_string(),
                    );
                    return DataType::Unknown;
                }
                if op.is_comparison() {
                    DataType::Bool
                } else if left_type == DataType::Float || right_type == DataType::Float {
                    DataType::Float
                } else {
                    DataType::Int
                }
            }
        }
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
