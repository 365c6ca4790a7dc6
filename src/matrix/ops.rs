use alloc::vec::Vec;
use core::ops::Neg;

use crate::element::Element;
use crate::error::MatrixError;
use crate::traits::Algebraic;

use super::Matrix;

/// Sum of `terms`, folded from the first term so that block cells keep
/// their shape. Empty sums are numeric zero.
pub(super) fn fold_sum(
    mut terms: impl Iterator<Item = Result<Element, MatrixError>>,
) -> Result<Element, MatrixError> {
    let Some(first) = terms.next() else {
        return Ok(Element::from(0.0));
    };
    terms.try_fold(first?, |acc, term| acc.try_add(&term?))
}

impl Matrix {
    fn zip_with(
        &self,
        rhs: &Matrix,
        f: impl Fn(&Element, &Element) -> Result<Element, MatrixError>,
    ) -> Result<Matrix, MatrixError> {
        if !self.is_same_size(rhs) {
            return Err(MatrixError::DimensionMismatch {
                left: self.size(),
                right: rhs.size(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(a, b)| f(a, b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix::from_parts(data, self.nrows, self.ncols))
    }

    /// Elementwise sum. Fails with [`MatrixError::DimensionMismatch`] unless
    /// both matrices have the same size.
    ///
    /// ```
    /// use algebris::Matrix;
    /// let a = Matrix::new([[1.0, 2.0]]);
    /// let b = Matrix::new([[10.0, 20.0]]);
    /// assert_eq!(a.try_add(&b).unwrap(), Matrix::new([[11.0, 22.0]]));
    /// ```
    pub fn try_add(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(rhs, |a, b| a.try_add(b))
    }

    /// Elementwise difference.
    pub fn try_sub(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(rhs, |a, b| a.try_sub(b))
    }

    /// Elementwise negation.
    pub fn negate(&self) -> Matrix {
        Matrix::from_parts(
            self.data.iter().map(|cell| cell.negate()).collect(),
            self.nrows,
            self.ncols,
        )
    }

    /// Add a cell value: a matrix operand is added directly, a leaf is
    /// promoted to a 1×1 matrix first.
    pub fn try_add_element(&self, rhs: &Element) -> Result<Matrix, MatrixError> {
        match rhs {
            Element::Matrix(m) => self.try_add(m),
            leaf => self.try_add(&Matrix::from_parts(alloc::vec![leaf.clone()], 1, 1)),
        }
    }

    /// Matrix product. Fails with [`MatrixError::NotConformable`] unless
    /// `self.ncols() == rhs.nrows()`.
    ///
    /// Cells combine through [`Element`] arithmetic, so numeric, symbolic
    /// and block cells may be mixed.
    ///
    /// ```
    /// use algebris::Matrix;
    /// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// let b = Matrix::new([[5.0], [6.0]]);
    /// assert_eq!(a.try_mul(&b).unwrap(), Matrix::new([[17.0], [39.0]]));
    /// ```
    pub fn try_mul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::NotConformable {
                left: self.size(),
                right: rhs.size(),
            });
        }
        let mut data = Vec::with_capacity(self.nrows * rhs.ncols);
        for i in 0..self.nrows {
            for j in 0..rhs.ncols {
                let terms = (0..self.ncols).map(|k| {
                    self.data[i * self.ncols + k].try_mul(&rhs.data[k * rhs.ncols + j])
                });
                data.push(fold_sum(terms)?);
            }
        }
        Ok(Matrix::from_parts(data, self.nrows, rhs.ncols))
    }

    /// Multiply every cell by `k` (cell on the left).
    pub fn scale(&self, k: &Element) -> Result<Matrix, MatrixError> {
        let data = self
            .data
            .iter()
            .map(|cell| cell.try_mul(k))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix::from_parts(data, self.nrows, self.ncols))
    }

    /// `self · rhs⁻¹`.
    pub fn try_div(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.try_mul(&rhs.inverse()?)
    }

    /// Transpose. An empty matrix transposes to a copy of itself.
    ///
    /// ```
    /// use algebris::Matrix;
    /// let m = Matrix::new([[1.0, 2.0, 3.0]]);
    /// assert_eq!(m.transpose(), Matrix::new([[1.0], [2.0], [3.0]]));
    /// ```
    pub fn transpose(&self) -> Matrix {
        if self.is_empty() {
            return self.clone();
        }
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.ncols {
            for i in 0..self.nrows {
                data.push(self.data[i * self.ncols + j].clone());
            }
        }
        Matrix::from_parts(data, self.ncols, self.nrows)
    }

    /// Frobenius inner product `Σ a_ij · b_ij`.
    pub fn dot_product(&self, rhs: &Matrix) -> Result<Element, MatrixError> {
        if !self.is_same_size(rhs) {
            return Err(MatrixError::DimensionMismatch {
                left: self.size(),
                right: rhs.size(),
            });
        }
        fold_sum(self.data.iter().zip(&rhs.data).map(|(a, b)| a.try_mul(b)))
    }
}

impl Neg for &Matrix {
    type Output = Matrix;
    fn neg(self) -> Matrix {
        self.negate()
    }
}

impl Neg for Matrix {
    type Output = Matrix;
    fn neg(self) -> Matrix {
        self.negate()
    }
}
