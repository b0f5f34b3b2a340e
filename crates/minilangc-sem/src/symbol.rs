use indexmap::IndexMap;

/// The role a declared name plays. MiniLang only ever declares plain
/// mutable variables, but the field exists to mirror the shape the
/// analyzer's rules are phrased against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Variable,
    Constant,
}

/// A value's inferred type. `Unknown` is the lattice bottom: it is
/// produced by an uninitialized read or a prior error, and is accepted
/// wherever a numeric type is expected so one mistake doesn't cascade
/// into a wall of unrelated errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Int,
    Float,
    Bool,
    Unknown,
}

impl DataType {
    pub fn is_numeric(self) -> bool {
        matches!(self, DataType::Int | DataType::Float | DataType::Unknown)
    }
}

/// One entry in the symbol table. `initialized` and `used` only ever
/// transition false→true for the lifetime of a single analysis.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub data_type: DataType,
    pub decl_line: u32,
    pub initialized: bool,
    pub used: bool,
}

/// Flat, insertion-ordered symbol table. MiniLang has a single namespace
/// with no nested scopes, so unlike a block-structured language's scope
/// stack this is just one map for the whole program.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: IndexMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name`. Fails if already present.
    pub fn declare(&mut self, name: &str, kind: SymbolKind, line: u32) -> Result<(), u32> {
        if let Some(existing) = self.symbols.get(name) {
            return Err(existing.decl_line);
        }
        self.symbols.insert(
            name.to_string(),
            Symbol {
                name: name.to_string(),
                kind,
                data_type: DataType::Unknown,
                decl_line: line,
                initialized: false,
                used: false,
            },
        );
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Marks `name` used. Absence is a bug in the analyzer, not a
    /// source-program error, so it panics rather than threading a
    /// `Result` through every call site.
    pub fn mark_used(&mut self, name: &str) {
        self.symbols
            .get_mut(name)
            .unwrap_or_else(|| panic!("mark_used: '{name}' not in symbol table"))
            .used = true;
    }

    pub fn mark_initialized(&mut self, name: &str) {
        self.symbols
            .get_mut(name)
            .unwrap_or_else(|| panic!("mark_initialized: '{name}' not in symbol table"))
            .initialized = true;
    }

    /// Records a value's type, inferring `data_type` when it is still
    /// `Unknown`, and marks the symbol initialized.
    pub fn update_value(&mut self, name: &str, data_type: DataType) {
        let symbol = self
            .symbols
            .get_mut(name)
            .unwrap_or_else(|| panic!("update_value: '{name}' not in symbol table"));
        if symbol.data_type == DataType::Unknown {
            symbol.data_type = data_type;
        }
        symbol.initialized = true;
    }

    /// Snapshot of all symbols, insertion order preserved.
    pub fn all_symbols(&self) -> Vec<&Symbol> {
        self.symbols.values().collect()
    }

    /// Derived, non-stored: one line per declared symbol that is unused,
    /// or used while possibly still uninitialized.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for symbol in self.symbols.values() {
            if !symbol.used {
                warnings.push(format!(
                    "variable '{}' declared but never used",
                    symbol.name
                ));
            } else if !symbol.initialized {
                warnings.push(format!(
                    "variable '{}' used but may be uninitialized",
                    symbol.name
                ));
            }
        }
        warnings
    }
}
