//! Structured errors for UI shell consumption
//!
//! Errors never crash the tool. They are values that propagate out of the
//! core as `Result`s and carry enough structure (row indices, expected
//! vs. found widths, mismatched shapes) for any shell to build its own
//! message.

use serde::Serialize;
use thiserror::Error;

use crate::{Operation, Shape};

/// Error type for text-to-matrix parsing
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseError {
    /// Input was empty or contained only blank lines
    #[error("no matrix data entered")]
    EmptyMatrix,

    /// `row` is 1-based over the original line numbering, blank lines
    /// included
    #[error("non-numeric data in row {row}: '{raw}'")]
    NonNumeric { row: usize, raw: String },

    #[error("row {row} has {found} columns, expected {expected}")]
    InconsistentRowLength {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// Error type for dimension validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DimensionError {
    #[error("matrices must have same dimensions: {lhs} vs {rhs}")]
    ElementwiseMismatch { lhs: Shape, rhs: Shape },

    #[error("incompatible dimensions for product: {lhs} and {rhs}")]
    ProductMismatch { lhs: Shape, rhs: Shape },

    #[error("requires a square matrix, got {shape}")]
    NotSquare { shape: Shape },
}

/// Error type for failures surfaced by the numeric routines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinAlgError {
    /// The factorization produced a non-finite value
    #[error("determinant of {shape} matrix is not finite")]
    NonFinite { shape: Shape },
}

/// Unified error returned at the dispatch boundary
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "class", rename_all = "snake_case")]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error(transparent)]
    LinAlg(#[from] LinAlgError),

    /// A binary operation was dispatched without its second operand
    #[error("{op} requires a second matrix")]
    MissingOperand { op: Operation },
}

impl Error {
    /// Short hint a shell can append to the message
    pub fn hint(&self) -> &'static str {
        match self {
            Error::Parse(_) => "Could not parse matrix input.",
            _ => "Please check your inputs and matrix dimensions.",
        }
    }
}
