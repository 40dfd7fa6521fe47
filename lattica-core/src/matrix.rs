//! Matrix and shape types
//!
//! A `Matrix` is an immutable rectangular grid of f64 values backed by
//! nalgebra. Operations never mutate a matrix in place; they produce a
//! new `Matrix` or a scalar.

use std::fmt;

use nalgebra::DMatrix;
use serde::Serialize;

use crate::ParseError;

/// Matrix dimensions as a (rows, cols) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.rows, self.cols)
    }
}

/// Rectangular grid of f64 values
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: DMatrix<f64>,
}

impl Matrix {
    /// Create a matrix from nested rows, validating rectangularity.
    ///
    /// Row indices in errors are 1-based, matching the parser's numbering.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ParseError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(ParseError::EmptyMatrix);
        }

        let cols = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ParseError::InconsistentRowLength {
                    row: i + 1,
                    found: row.len(),
                    expected: cols,
                });
            }
        }

        let nrows = rows.len();
        let data = DMatrix::from_row_iterator(nrows, cols, rows.into_iter().flatten());
        Ok(Self { data })
    }

    /// Create from nalgebra DMatrix
    pub fn from_dmatrix(data: DMatrix<f64>) -> Self {
        Self { data }
    }

    /// Get number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Get number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as a Shape
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows(), self.cols())
    }

    /// Get element at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows() && col < self.cols() {
            Some(self.data[(row, col)])
        } else {
            None
        }
    }

    /// Check if matrix is square
    pub fn is_square(&self) -> bool {
        self.shape().is_square()
    }

    /// Borrow the underlying nalgebra matrix
    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Convert to nested rows
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows())
            .map(|i| (0..self.cols()).map(|j| self.data[(i, j)]).collect())
            .collect()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.rows() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for j in 0..self.cols() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:.4}", self.data[(i, j)])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
