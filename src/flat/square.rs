use alloc::vec::Vec;

use crate::error::MatrixError;
use crate::linalg::gauss_jordan_flat;

use super::FlatMatrix;

impl FlatMatrix {
    /// Identity of the same shape.
    pub fn to_unit(&self) -> Self {
        Self::unit(self.nrows, self.ncols)
    }

    /// Zero matrix of the same shape.
    pub fn to_zero(&self) -> Self {
        Self::zeros(self.nrows, self.ncols)
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// Fails with [`MatrixError::NotSquare`] or, for a `0 x 0` matrix,
    /// [`MatrixError::InvalidShape`].
    pub fn determinant(&self) -> Result<f64, MatrixError> {
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
            return Ok(self.data[0]);
        }
        let mut det = 0.0;
        for j in 0..self.ncols {
            let cofactor = self.data[j] * self.minor_of(0, j)?.determinant()?;
            if j % 2 == 1 {
                det -= cofactor;
            } else {
                det += cofactor;
            }
        }
        Ok(det)
    }

    /// The matrix with row `row` and column `col` removed.
    pub fn minor_of(&self, row: usize, col: usize) -> Result<Self, MatrixError> {
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
                data.push(self.data[i * self.ncols + j]);
            }
        }
        Ok(Self::from_parts(data, self.nrows - 1, self.ncols - 1))
    }

    /// Inverse by Gauss–Jordan elimination.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        gauss_jordan_flat(self, &self.to_unit())
    }

    /// Solve `self · x = rhs` for `x`.
    ///
    /// ```
    /// use algebris::FlatMatrix;
    /// let a = FlatMatrix::new([[2.0, 1.0], [1.0, 3.0]]);
    /// let b = FlatMatrix::new([[3.0], [5.0]]);
    /// assert_eq!(a.solve(&b).unwrap(), FlatMatrix::new([[0.8], [1.4]]));
    /// ```
    pub fn solve(&self, rhs: &FlatMatrix) -> Result<Self, MatrixError> {
        gauss_jordan_flat(self, rhs)
    }
}
