use thiserror::Error;

/// Semantic errors are collected non-fatally across a full traversal,
/// then reported as a single aggregate so one pass surfaces everything
/// wrong with a program instead of stopping at the first mistake.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SemanticError {
    #[error("use of undeclared identifier '{name}' at line {line}")]
    UndeclaredIdentifier { name: String, line: u32 },

    #[error("redeclaration of '{name}' at line {line} (first declared at line {first_line})")]
    Redeclaration {
        name: String,
        line: u32,
        first_line: u32,
    },

    #[error("non-numeric operand to '{op}' at line {line}")]
    NonNumericOperand { op: String, line: u32 },

    #[error("{0}")]
    Aggregate(String),
}

impl SemanticError {
    /// Joins individually-collected messages into the single aggregate
    /// error a full traversal reports.
    pub fn aggregate(messages: Vec<String>) -> Self {
        SemanticError::Aggregate(messages.join("\n"))
    }
}
