//! Operation dispatch
//!
//! Dimension checks happen here; the arithmetic itself is delegated to
//! nalgebra operators and its LU-based determinant.

use lattica_core::{DimensionError, Error, LinAlgError, Matrix, Operation, Outcome};

/// Dispatch one operation over parsed operands
///
/// Binary operations require `b`; transpose and determinant ignore it.
pub fn dispatch(op: Operation, a: &Matrix, b: Option<&Matrix>) -> Result<Outcome, Error> {
    match op {
        Operation::Add => add(a, require_operand(op, b)?),
        Operation::Subtract => subtract(a, require_operand(op, b)?),
        Operation::Multiply => multiply(a, require_operand(op, b)?),
        Operation::Transpose => Ok(transpose(a)),
        Operation::Determinant => determinant(a),
    }
}

fn require_operand(op: Operation, b: Option<&Matrix>) -> Result<&Matrix, Error> {
    b.ok_or(Error::MissingOperand { op })
}

// ============ add ============

/// Element-wise matrix addition
pub fn add(a: &Matrix, b: &Matrix) -> Result<Outcome, Error> {
    check_same_dims(a, b)?;
    Ok(Matrix::from_dmatrix(a.as_dmatrix() + b.as_dmatrix()).into())
}

// ============ subtract ============

/// Element-wise matrix subtraction
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Outcome, Error> {
    check_same_dims(a, b)?;
    Ok(Matrix::from_dmatrix(a.as_dmatrix() - b.as_dmatrix()).into())
}

// ============ multiply ============

/// Matrix product; result has shape (a.rows, b.cols)
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Outcome, Error> {
    check_product_dims(a, b)?;
    Ok(Matrix::from_dmatrix(a.as_dmatrix() * b.as_dmatrix()).into())
}

// ============ transpose ============

/// Matrix transpose; element (i, j) of the result is (j, i) of the input
pub fn transpose(a: &Matrix) -> Outcome {
    Matrix::from_dmatrix(a.as_dmatrix().transpose()).into()
}

// ============ determinant ============

/// Determinant of a square matrix
pub fn determinant(a: &Matrix) -> Result<Outcome, Error> {
    check_square(a)?;
    let det = a.as_dmatrix().determinant();
    if !det.is_finite() {
        return Err(LinAlgError::NonFinite { shape: a.shape() }.into());
    }
    Ok(det.into())
}

// ============ dimension checks ============

fn check_same_dims(a: &Matrix, b: &Matrix) -> Result<(), DimensionError> {
    if a.shape() != b.shape() {
        return Err(DimensionError::ElementwiseMismatch {
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(())
}

fn check_product_dims(a: &Matrix, b: &Matrix) -> Result<(), DimensionError> {
    if a.cols() != b.rows() {
        return Err(DimensionError::ProductMismatch {
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(())
}

fn check_square(m: &Matrix) -> Result<(), DimensionError> {
    if !m.is_square() {
        return Err(DimensionError::NotSquare { shape: m.shape() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattica_core::Shape;

    fn matrix(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    fn expect_matrix(outcome: Outcome) -> Matrix {
        match outcome {
            Outcome::Matrix(m) => m,
            Outcome::Scalar(x) => panic!("expected matrix, got scalar {}", x),
        }
    }

    #[test]
    fn test_add() {
        let a = matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = matrix(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        let sum = expect_matrix(dispatch(Operation::Add, &a, Some(&b)).unwrap());
        assert_eq!(sum.to_rows(), vec![vec![6.0, 8.0], vec![10.0, 12.0]]);
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a = matrix(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let b = matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        let err = dispatch(Operation::Add, &a, Some(&b)).unwrap_err();
        assert_eq!(
            err,
            Error::Dimension(DimensionError::ElementwiseMismatch {
                lhs: Shape::new(2, 3),
                rhs: Shape::new(3, 2),
            })
        );
    }

    #[test]
    fn test_add_then_subtract_roundtrip() {
        let a = matrix(vec![vec![1.25, -2.5, 3.0], vec![0.1, 0.2, 0.3]]);
        let b = matrix(vec![vec![9.0, 8.0, 7.5], vec![-1.0, 0.5, 2.25]]);

        let sum = expect_matrix(dispatch(Operation::Add, &a, Some(&b)).unwrap());
        let back = expect_matrix(dispatch(Operation::Subtract, &sum, Some(&b)).unwrap());

        for i in 0..a.rows() {
            for j in 0..a.cols() {
                let diff = (back.get(i, j).unwrap() - a.get(i, j).unwrap()).abs();
                assert!(diff < 1e-9, "diff at ({}, {}): {}", i, j, diff);
            }
        }
    }

    #[test]
    fn test_multiply_example() {
        let a = matrix(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let b = matrix(vec![vec![7.0, 8.0], vec![9.0, 1.0], vec![2.0, 3.0]]);
        let product = expect_matrix(dispatch(Operation::Multiply, &a, Some(&b)).unwrap());
        assert_eq!(product.shape(), Shape::new(2, 2));
        assert_eq!(product.to_rows(), vec![vec![31.0, 17.0], vec![85.0, 55.0]]);
    }

    #[test]
    fn test_multiply_product_mismatch() {
        let a = matrix(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let b = matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let err = dispatch(Operation::Multiply, &a, Some(&b)).unwrap_err();
        assert_eq!(
            err,
            Error::Dimension(DimensionError::ProductMismatch {
                lhs: Shape::new(2, 3),
                rhs: Shape::new(2, 2),
            })
        );
    }

    #[test]
    fn test_transpose() {
        let a = matrix(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = expect_matrix(dispatch(Operation::Transpose, &a, None).unwrap());
        assert_eq!(t.shape(), Shape::new(3, 2));
        assert_eq!(t.get(0, 1), a.get(1, 0));
        assert_eq!(t.get(2, 0), a.get(0, 2));
    }

    #[test]
    fn test_transpose_involutive() {
        let a = matrix(vec![vec![1.0, -2.5], vec![0.0, 4.0], vec![7.5, 3.25]]);
        let t = expect_matrix(transpose(&a));
        let tt = expect_matrix(transpose(&t));
        assert_eq!(tt, a);
    }

    #[test]
    fn test_transpose_ignores_b() {
        let a = matrix(vec![vec![1.0, 2.0]]);
        let b = matrix(vec![vec![9.0]]);
        let t = expect_matrix(dispatch(Operation::Transpose, &a, Some(&b)).unwrap());
        assert_eq!(t.shape(), Shape::new(2, 1));
    }

    #[test]
    fn test_determinant() {
        let a = matrix(vec![vec![2.0, 0.0], vec![0.0, 2.0]]);
        let det = dispatch(Operation::Determinant, &a, None).unwrap();
        assert_eq!(det.as_scalar(), Some(4.0));
    }

    #[test]
    fn test_determinant_singular_is_zero() {
        let a = matrix(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
        let det = dispatch(Operation::Determinant, &a, None).unwrap();
        assert!(det.as_scalar().unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_determinant_not_square() {
        let a = matrix(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let err = dispatch(Operation::Determinant, &a, None).unwrap_err();
        assert_eq!(
            err,
            Error::Dimension(DimensionError::NotSquare {
                shape: Shape::new(2, 3),
            })
        );
    }

    #[test]
    fn test_determinant_non_finite() {
        let a = matrix(vec![vec![f64::MAX, 1.0], vec![1.0, f64::MAX]]);
        let err = dispatch(Operation::Determinant, &a, None).unwrap_err();
        assert!(matches!(err, Error::LinAlg(LinAlgError::NonFinite { .. })));
    }

    #[test]
    fn test_missing_operand() {
        let a = matrix(vec![vec![1.0]]);
        let err = dispatch(Operation::Add, &a, None).unwrap_err();
        assert_eq!(err, Error::MissingOperand { op: Operation::Add });
    }
}
