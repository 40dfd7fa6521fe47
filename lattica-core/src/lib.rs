//! Lattica Core - Fundamental types
//!
//! This crate provides the core types used throughout Lattica:
//! - `Matrix`: immutable rectangular grid of f64 values
//! - `Operation`: tag selecting one of the five supported operations
//! - `Outcome`: successful result of an operation (matrix or scalar)
//! - `Error`: structured errors for UI shell consumption

mod error;
mod matrix;
mod operation;
mod outcome;

pub use matrix::{Matrix, Shape};
pub use operation::Operation;
pub use outcome::Outcome;
pub use error::{DimensionError, Error, LinAlgError, ParseError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        DimensionError, Error, LinAlgError, Matrix, Operation, Outcome, ParseError, Shape,
    };
}
