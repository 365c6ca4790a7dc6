use alloc::vec::Vec;

use crate::element::Element;
use crate::error::MatrixError;
use crate::linalg::gauss_jordan;
use crate::traits::Algebraic;

use super::ops::fold_sum;
use super::Matrix;

impl Matrix {
    /// Determinant by cofactor expansion along the first row.
    ///
    /// Requires a non-empty square matrix. Cost grows factorially with the
    /// size; see also
    /// [`FlatMatrix::determinant`](crate::FlatMatrix::determinant).
    ///
    /// ```
    /// use algebris::{Algebraic, Matrix};
    /// let a = Matrix::new([[2.0, 1.0], [1.0, 3.0]]);
    /// assert_eq!(a.determinant().unwrap().to_f64(), 5.0);
    /// ```
    pub fn determinant(&self) -> Result<Element, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.nrows,
                cols: self.ncols,
            });
        }
        if self.is_empty() {
            return Err(MatrixError::InvalidShape {
                rows: self.nrows,
                cols: self.ncols,
            });
        }
        if self.nrows == 1 {
            return Ok(self.data[0].clone());
        }
        let terms = (0..self.ncols).map(|j| -> Result<Element, MatrixError> {
            let cofactor = self.data[j].try_mul(&self.minor_of(0, j)?.determinant()?)?;
            Ok(if j % 2 == 1 { cofactor.negate() } else { cofactor })
        });
        fold_sum(terms)
    }

    /// The matrix with row `row` and column `col` removed.
    ///
    /// ```
    /// use algebris::Matrix;
    /// let a = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    /// assert_eq!(a.minor_of(1, 1).unwrap(), Matrix::new([[1.0, 3.0], [7.0, 9.0]]));
    /// ```
    pub fn minor_of(&self, row: usize, col: usize) -> Result<Matrix, MatrixError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.nrows,
                cols: self.ncols,
            });
        }
        let mut data = Vec::with_capacity((self.nrows - 1) * (self.ncols - 1));
        for i in (0..self.nrows).filter(|&i| i != row) {
            for j in (0..self.ncols).filter(|&j| j != col) {
                data.push(self.data[i * self.ncols + j].clone());
            }
        }
        Ok(Matrix::from_parts(data, self.nrows - 1, self.ncols - 1))
    }

    /// Inverse by Gauss–Jordan elimination against [`to_unit`](Self::to_unit).
    ///
    /// Fails with [`MatrixError::NotSquare`], [`MatrixError::InvalidShape`]
    /// or [`MatrixError::Singular`].
    ///
    /// ```
    /// use algebris::Matrix;
    /// let a = Matrix::new([[2.0, 0.0], [0.0, 4.0]]);
    /// assert_eq!(a.inverse().unwrap(), Matrix::new([[0.5, 0.0], [0.0, 0.25]]));
    /// ```
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        gauss_jordan(self, &self.to_unit())
    }

    /// Solve `self · x = rhs` for `x`.
    pub fn solve(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        gauss_jordan(self, rhs)
    }
}

impl Algebraic for Matrix {
    fn is_zero(&self) -> bool {
        Matrix::is_zero(self)
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        Matrix::try_add(self, rhs)
    }

    fn negate(&self) -> Self {
        Matrix::negate(self)
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        Matrix::try_mul(self, rhs)
    }

    fn try_inv(&self) -> Result<Self, MatrixError> {
        self.inverse()
    }

    /// A matrix has no scalar reading.
    fn to_f64(&self) -> f64 {
        0.0
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        Matrix::try_sub(self, rhs)
    }
}
