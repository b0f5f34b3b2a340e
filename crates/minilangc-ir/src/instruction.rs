use std::fmt;

use minilangc_par::BinOp;

use crate::operand::Operand;

/// The opcode of a three-address instruction. Binary arithmetic and
/// comparison ops reuse `minilangc_par::BinOp` rather than duplicating
/// its variant set and `symbol()` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Assign,
    Label,
    Goto,
    IfFalse,
    /// Never emitted by the generator; reserved in the taxonomy for
    /// symmetry with `IfFalse`.
    IfTrue,
    Print,
    UnaryMinus,
    UnaryPlus,
    Binary(BinOp),
}

/// A single three-address instruction. Not every field is meaningful
/// for every `op` — e.g. `Label`/`Goto` only use `result`, `Print` only
/// uses `arg1` — `Display` renders exactly the shape each op needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub op: Op,
    pub arg1: Option<Operand>,
    pub arg2: Option<Operand>,
    pub result: Option<Operand>,
}

impl Instruction {
    pub fn assign(value: Operand, target: Operand) -> Self {
        Self {
            op: Op::Assign,
            arg1: Some(value),
            arg2: None,
            result: Some(target),
        }
    }

    pub fn label(label: Operand) -> Self {
        Self {
            op: Op::Label,
            arg1: None,
            arg2: None,
            result: Some(label),
        }
    }

    pub fn goto(label: Operand) -> Self {
        Self {
            op: Op::Goto,
            arg1: None,
            arg2: None,
            result: Some(label),
        }
    }

    pub fn if_false(condition: Operand, label: Operand) -> Self {
        Self {
            op: Op::IfFalse,
            arg1: Some(condition),
            arg2: None,
            result: Some(label),
        }
    }

    pub fn print(value: Operand) -> Self {
        Self {
            op: Op::Print,
            arg1: Some(value),
            arg2: None,
            result: None,
        }
    }

    pub fn unary(op: Op, operand: Operand, result: Operand) -> Self {
        Self {
            op,
            arg1: Some(operand),
            arg2: None,
            result: Some(result),
        }
    }

    pub fn binary(op: BinOp, left: Operand, right: Operand, result: Operand) -> Self {
        Self {
            op: Op::Binary(op),
            arg1: Some(left),
            arg2: Some(right),
            result: Some(result),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            Op::Assign => write!(
                f,
                "{} = {}",
                self.result.as_ref().unwrap(),
                self.arg1.as_ref().unwrap()
            ),
            Op::Label => write!(f, "{}:", self.result.as_ref().unwrap()),
            Op::Goto => write!(f, "goto {}", self.result.as_ref().unwrap()),
            Op::IfFalse => write!(
                f,
                "if_false {} goto {}",
                self.arg1.as_ref().unwrap(),
                self.result.as_ref().unwrap()
            ),
            Op::IfTrue => write!(
                f,
                "if_true {} goto {}",
                self.arg1.as_ref().unwrap(),
                self.result.as_ref().unwrap()
            ),
            Op::Print => write!(f, "print {}", self.arg1.as_ref().unwrap()),
            Op::UnaryMinus => write!(
                f,
                "{} = -{}",
                self.result.as_ref().unwrap(),
                self.arg1.as_ref().unwrap()
            ),
            Op::UnaryPlus => write!(
                f,
                "{} = +{}",
                self.result.as_ref().unwrap(),
                self.arg1.as_ref().unwrap()
            ),
            Op::Binary(op) => write!(
                f,
                "{} = {} {} {}",
                self.result.as_ref().unwrap(),
                self.arg1.as_ref().unwrap(),
                op.symbol(),
                self.arg2.as_ref().unwrap()
            ),
        }
    }
}
