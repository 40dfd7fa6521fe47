//! Operation results

use crate::Matrix;

/// Successful result of a dispatched operation
///
/// The failure arm lives on the `Err` side of `Result<Outcome, Error>`,
/// so an `Outcome` is always displayable.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Matrix(Matrix),
    Scalar(f64),
}

impl Outcome {
    // ========== Safe Accessors (never panic) ==========

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Outcome::Matrix(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Outcome::Scalar(x) => Some(*x),
            _ => None,
        }
    }
}

impl From<Matrix> for Outcome {
    fn from(m: Matrix) -> Self {
        Outcome::Matrix(m)
    }
}

impl From<f64> for Outcome {
    fn from(x: f64) -> Self {
        Outcome::Scalar(x)
    }
}
