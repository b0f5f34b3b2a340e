use std::fmt;

/// Which pipeline stage produced a result or an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Lexical,
    Syntactic,
    Semantic,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Lexical => "lexical",
            Stage::Syntactic => "syntactic",
            Stage::Semantic => "semantic",
        };
        write!(f, "{name}")
    }
}
