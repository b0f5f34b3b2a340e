//! minilangc-util - Shared foundation types for the minilangc pipeline.
//!
//! Every stage crate (`minilangc-lex`, `minilangc-par`, `minilangc-sem`,
//! `minilangc-ir`) depends on this crate for the one thing they all need:
//! a source position. Everything else (tokens, AST, symbol table,
//! instructions) is owned by the stage that produces it.

mod span;
mod stage;

pub use span::Span;
pub use stage::Stage;

/// Logs a stage boundary at `debug` level.
///
/// Thin wrapper so stage crates don't each pull in `log` macros directly
/// for this one recurring line shape; kept off any per-character or
/// per-token hot path.
pub fn trace_stage(stage: Stage, detail: &str) {
    log::debug!("[{stage}] {detail}");
}
