use minilangc_ir::Instruction;
use minilangc_lex::Token;
use minilangc_par::Program;
use minilangc_sem::SymbolTable;

/// Every artifact handed off by a successful `compile` call.
#[derive(Debug)]
pub struct CompileOutput {
    pub tokens: Vec<Token>,
    pub ast: Program,
    pub symbol_table: SymbolTable,
    pub ir: Vec<Instruction>,
    pub warnings: Vec<String>,
}
