//! Operation selection tag

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five supported matrix operations
///
/// Transpose and Determinant are unary: they consume only the first
/// operand. The rest are binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Transpose,
    Determinant,
}

impl Operation {
    /// All operations, in display order
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Transpose,
        Operation::Determinant,
    ];

    /// Look up an operation by protocol name
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "add" | "+" => Some(Operation::Add),
            "subtract" | "sub" | "-" => Some(Operation::Subtract),
            "multiply" | "mul" | "matmul" | "*" => Some(Operation::Multiply),
            "transpose" => Some(Operation::Transpose),
            "determinant" | "det" => Some(Operation::Determinant),
            _ => None,
        }
    }

    /// Canonical protocol name
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Transpose => "transpose",
            Operation::Determinant => "determinant",
        }
    }

    /// Whether the operation consumes a second matrix
    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            Operation::Add | Operation::Subtract | Operation::Multiply
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
