mod ops;
mod square;
mod util;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;

use crate::error::MatrixError;
use crate::tolerance::near_zero;
use crate::traits::{MatrixMut, MatrixRef, RowOps};

/// Dense `f64` matrix for the common real-number case.
///
/// Row-major `Vec<f64>` storage. Zero tests and equality are tolerant to
/// [`EPSILON`](crate::tolerance::EPSILON); everything else mirrors
/// [`Matrix`](crate::Matrix) without block support. Implements
/// [`RowOps`], so [`gauss_jordan_in_place`](crate::linalg::gauss_jordan_in_place)
/// runs on it directly.
///
/// # Examples
///
/// ```
/// use algebris::FlatMatrix;
///
/// let a = FlatMatrix::new([[4.0, 7.0], [2.0, 6.0]]);
/// let inv = a.inverse().unwrap();
/// assert_eq!(a.try_mul(&inv).unwrap(), FlatMatrix::eye(2));
/// assert!((a.determinant().unwrap() - 10.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct FlatMatrix {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl FlatMatrix {
    /// Create from a row-major grid literal.
    pub fn new<const M: usize, const N: usize>(rows: [[f64; N]; M]) -> Self {
        Self {
            data: rows.iter().flatten().copied().collect(),
            nrows: M,
            ncols: N,
        }
    }

    /// Create from nested rows. Fails with [`MatrixError::InvalidInput`] if
    /// the rows differ in length.
    ///
    /// ```
    /// use algebris::FlatMatrix;
    /// let m = FlatMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    /// assert!(FlatMatrix::from_rows(vec![vec![1.0], vec![]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != ncols) {
            return Err(MatrixError::InvalidInput("rows differ in length"));
        }
        Ok(Self::from_parts(rows.concat(), nrows, ncols))
    }

    /// Create from a row-major vector.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        if data.len() != nrows * ncols {
            return Err(MatrixError::InvalidInput(
                "element count does not match dimensions",
            ));
        }
        Ok(Self::from_parts(data, nrows, ncols))
    }

    /// Create by calling `f(row, col)` for each cell.
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self::from_parts(data, nrows, ncols)
    }

    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_parts(vec![0.0; nrows * ncols], nrows, ncols)
    }

    /// Ones on the leading diagonal, zeros elsewhere.
    ///
    /// ```
    /// use algebris::FlatMatrix;
    /// let u = FlatMatrix::unit(2, 3);
    /// assert_eq!(u.to_rows(), vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0]]);
    /// ```
    pub fn unit(nrows: usize, ncols: usize) -> Self {
        Self::from_fn(nrows, ncols, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// `n x n` identity.
    pub fn eye(n: usize) -> Self {
        Self::unit(n, n)
    }

    pub(crate) fn from_parts(data: Vec<f64>, nrows: usize, ncols: usize) -> Self {
        debug_assert_eq!(data.len(), nrows * ncols);
        Self { data, nrows, ncols }
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl FlatMatrix {
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0 || self.ncols == 0
    }

    pub fn is_same_size(&self, other: &FlatMatrix) -> bool {
        self.size() == other.size()
    }

    /// Whether every cell is within tolerance of zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| near_zero(x))
    }

    /// Cell at `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.nrows && col < self.ncols {
            Some(self.data[row * self.ncols + col])
        } else {
            None
        }
    }

    /// Cells in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy of the cells as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.ncols == 0 {
            return (0..self.nrows).map(|_| Vec::new()).collect();
        }
        self.data.chunks(self.ncols).map(<[f64]>::to_vec).collect()
    }
}

// ── MatrixRef / MatrixMut / RowOps ──────────────────────────────────

impl MatrixRef<f64> for FlatMatrix {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &f64 {
        &self.data[row * self.ncols + col]
    }
}

impl MatrixMut<f64> for FlatMatrix {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        &mut self.data[row * self.ncols + col]
    }
}

impl RowOps<f64> for FlatMatrix {
    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let n = self.ncols;
        let (lo, hi) = (a.min(b), a.max(b));
        let (head, tail) = self.data.split_at_mut(hi * n);
        head[lo * n..(lo + 1) * n].swap_with_slice(&mut tail[..n]);
    }

    fn scale_row(&mut self, row: usize, factor: &f64) -> Result<(), MatrixError> {
        let n = self.ncols;
        for x in &mut self.data[row * n..(row + 1) * n] {
            *x *= factor;
        }
        Ok(())
    }

    fn sub_scaled_row(
        &mut self,
        target: usize,
        source: usize,
        factor: &f64,
    ) -> Result<(), MatrixError> {
        let n = self.ncols;
        for j in 0..n {
            let s = self.data[source * n + j];
            self.data[target * n + j] -= s * factor;
        }
        Ok(())
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl Index<(usize, usize)> for FlatMatrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols
        );
        &self.data[row * self.ncols + col]
    }
}
