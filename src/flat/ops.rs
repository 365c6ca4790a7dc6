use alloc::vec::Vec;
use core::ops::{Mul, Neg};

use crate::error::MatrixError;

use super::FlatMatrix;

impl FlatMatrix {
    fn zip_with(&self, rhs: &FlatMatrix, f: impl Fn(f64, f64) -> f64) -> Result<Self, MatrixError> {
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
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self::from_parts(data, self.nrows, self.ncols))
    }

    /// Elementwise sum; operands must have the same size.
    pub fn try_add(&self, rhs: &FlatMatrix) -> Result<Self, MatrixError> {
        self.zip_with(rhs, |a, b| a + b)
    }

    pub fn try_sub(&self, rhs: &FlatMatrix) -> Result<Self, MatrixError> {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// Elementwise (Hadamard) product.
    ///
    /// ```
    /// use algebris::FlatMatrix;
    /// let a = FlatMatrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// let b = FlatMatrix::new([[5.0, 6.0], [7.0, 8.0]]);
    /// assert_eq!(a.hadamard(&b).unwrap(), FlatMatrix::new([[5.0, 12.0], [21.0, 32.0]]));
    /// ```
    pub fn hadamard(&self, rhs: &FlatMatrix) -> Result<Self, MatrixError> {
        self.zip_with(rhs, |a, b| a * b)
    }

    /// Apply `f` to every cell.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::from_parts(self.data.iter().map(|&x| f(x)).collect(), self.nrows, self.ncols)
    }

    pub fn scale(&self, k: f64) -> Self {
        self.map(|x| x * k)
    }

    /// Matrix product. Fails with [`MatrixError::NotConformable`] unless
    /// `self.ncols() == rhs.nrows()`.
    pub fn try_mul(&self, rhs: &FlatMatrix) -> Result<Self, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::NotConformable {
                left: self.size(),
                right: rhs.size(),
            });
        }
        let mut data = Vec::with_capacity(self.nrows * rhs.ncols);
        for i in 0..self.nrows {
            let row = &self.data[i * self.ncols..(i + 1) * self.ncols];
            for j in 0..rhs.ncols {
                let mut sum = 0.0;
                for (k, &a) in row.iter().enumerate() {
                    sum += a * rhs.data[k * rhs.ncols + j];
                }
                data.push(sum);
            }
        }
        Ok(Self::from_parts(data, self.nrows, rhs.ncols))
    }

    /// `self · rhs⁻¹`.
    pub fn try_div(&self, rhs: &FlatMatrix) -> Result<Self, MatrixError> {
        self.try_mul(&rhs.inverse()?)
    }

    /// Frobenius inner product.
    pub fn dot_product(&self, rhs: &FlatMatrix) -> Result<f64, MatrixError> {
        Ok(self.hadamard(rhs)?.data.iter().sum())
    }

    /// Transpose. An empty matrix transposes to a copy of itself.
    pub fn transpose(&self) -> Self {
        if self.is_empty() {
            return self.clone();
        }
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.ncols {
            for i in 0..self.nrows {
                data.push(self.data[i * self.ncols + j]);
            }
        }
        Self::from_parts(data, self.ncols, self.nrows)
    }
}

impl Neg for &FlatMatrix {
    type Output = FlatMatrix;
    fn neg(self) -> FlatMatrix {
        self.map(|x| -x)
    }
}

impl Neg for FlatMatrix {
    type Output = FlatMatrix;
    fn neg(self) -> FlatMatrix {
        -&self
    }
}

impl Mul<f64> for &FlatMatrix {
    type Output = FlatMatrix;
    fn mul(self, k: f64) -> FlatMatrix {
        self.scale(k)
    }
}

impl Mul<f64> for FlatMatrix {
    type Output = FlatMatrix;
    fn mul(self, k: f64) -> FlatMatrix {
        self.scale(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elementwise() {
        let a = FlatMatrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = FlatMatrix::new([[0.5, 0.5], [0.5, 0.5]]);
        assert_eq!(a.try_add(&b).unwrap(), FlatMatrix::new([[1.5, 2.5], [3.5, 4.5]]));
        assert_eq!(a.try_sub(&a).unwrap(), FlatMatrix::zeros(2, 2));
        assert_eq!(-&a, a.scale(-1.0));
        assert_eq!(&a * 2.0, FlatMatrix::new([[2.0, 4.0], [6.0, 8.0]]));
        assert_eq!(a.dot_product(&a).unwrap(), 30.0);
        assert!(a.try_add(&FlatMatrix::zeros(1, 2)).is_err());
    }

    #[test]
    fn product() {
        let a = FlatMatrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(
            a.try_mul(&a.transpose()).unwrap(),
            FlatMatrix::new([[14.0, 32.0], [32.0, 77.0]])
        );
        assert_eq!(
            a.try_mul(&a),
            Err(MatrixError::NotConformable {
                left: (2, 3),
                right: (2, 3)
            })
        );
    }

    #[test]
    fn division() {
        let a = FlatMatrix::new([[2.0, 1.0], [1.0, 3.0]]);
        let b = FlatMatrix::new([[4.0, 7.0], [2.0, 6.0]]);
        let q = a.try_div(&b).unwrap();
        assert_eq!(q.try_mul(&b).unwrap(), a);
    }

    #[test]
    fn transpose_twice() {
        let a = FlatMatrix::new([[1.0, 2.0, 3.0]]);
        assert_eq!(a.transpose().size(), (3, 1));
        assert_eq!(a.transpose().transpose(), a);
        assert_eq!(FlatMatrix::zeros(0, 4).transpose().size(), (0, 4));
    }
}
