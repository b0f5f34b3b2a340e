use minilangc_lex::Number;

/// A source file is just a flat sequence of statements — MiniLang has no
/// notion of top-level items beyond statements.
#[derive(Debug, Clone)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// Binary operators, shared between expression nodes and (eventually) IR
/// instruction opcodes so the IR generator can reuse the same symbol
/// rather than re-deriving it from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Eq => "==",
            BinOp::NotEq => "!=",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::LtEq => "<=",
            BinOp::GtEq => ">=",
        }
    }

    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinOp::Eq | BinOp::NotEq | BinOp::Lt | BinOp::Gt | BinOp::LtEq | BinOp::GtEq
        )
    }
}

/// Unary operators — MiniLang only has unary `+` and `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Plus,
    Neg,
}

impl UnOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnOp::Plus => "+",
            UnOp::Neg => "-",
        }
    }
}

/// Statements. Each variant carries the source line of its defining
/// token (the leading keyword, or the identifier for an assignment).
#[derive(Debug, Clone)]
pub enum Stmt {
    VarDeclaration {
        name: String,
        line: u32,
    },
    Assignment {
        target: String,
        expr: Expr,
        line: u32,
    },
    If {
        condition: Expr,
        then_block: Vec<Stmt>,
        else_block: Option<Vec<Stmt>>,
        line: u32,
    },
    While {
        condition: Expr,
        body: Vec<Stmt>,
        line: u32,
    },
    Print {
        expr: Expr,
        line: u32,
    },
}

impl Stmt {
    pub fn line(&self) -> u32 {
        match self {
            Stmt::VarDeclaration { line, .. }
            | Stmt::Assignment { line, .. }
            | Stmt::If { line, .. }
            | Stmt::While { line, .. }
            | Stmt::Print { line, .. } => *line,
        }
    }
}

/// Expressions. For binary/unary nodes the line is that of the operator
/// token; for literals and identifiers, the line of the token itself.
#[derive(Debug, Clone)]
pub enum Expr {
    Number {
        value: Number,
        line: u32,
    },
    Identifier {
        name: String,
        line: u32,
    },
    Unary {
        op: UnOp,
        operand: Box<Expr>,
        line: u32,
    },
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        line: u32,
    },
}

impl Expr {
    pub fn line(&self) -> u32 {
        match self {
            Expr::Number { line, .. }
            | Expr::Identifier { line, .. }
            | Expr::Unary { line, .. }
            | Expr::Binary { line, .. } => *line,
        }
    }
}
