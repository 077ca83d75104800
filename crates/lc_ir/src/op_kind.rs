//! Register update operators.

use std::fmt;

/// Operator applied by one update record: `target <op> operand`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OpKind {
    Add,
    Subtract,
    Multiply,
}

impl OpKind {
    /// All operators, in keyword order.
    pub const ALL: [OpKind; 3] = [OpKind::Add, OpKind::Subtract, OpKind::Multiply];

    /// Parse a (lowercase) operator keyword.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "add" => Some(OpKind::Add),
            "subtract" => Some(OpKind::Subtract),
            "multiply" => Some(OpKind::Multiply),
            _ => None,
        }
    }

    /// The keyword that spells this operator.
    pub fn keyword(self) -> &'static str {
        match self {
            OpKind::Add => "add",
            OpKind::Subtract => "subtract",
            OpKind::Multiply => "multiply",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
