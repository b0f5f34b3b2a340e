use std::fmt;

/// An instruction operand. Kept as a sum type rather than an opaque
/// string so callers can match on what kind of value they're holding;
/// the `Display` rendering is what golden-file tests compare against.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Name(String),
    Temp(u32),
    Label(u32),
    IntLit(i64),
    FloatLit(f64),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Name(name) => write!(f, "{name}"),
            Operand::Temp(n) => write!(f, "t{n}"),
            Operand::Label(n) => write!(f, "L{n}"),
            Operand::IntLit(v) => write!(f, "{v}"),
            // Python's `str(float)` always keeps a decimal point (`str(3.0)
            // == "3.0"`); Rust's `Display` for f64 drops it for whole
            // numbers, but `Debug` matches Python's rendering here.
            Operand::FloatLit(v) => write!(f, "{v:?}"),
        }
    }
}
