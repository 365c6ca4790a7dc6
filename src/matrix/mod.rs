mod block;
mod ops;
mod square;
pub(crate) mod util;
mod vector;

pub(crate) use vector::RowVector;

use alloc::vec::Vec;
use core::ops::Index;

use crate::element::Element;
use crate::error::MatrixError;
use crate::number::Number;
use crate::symbolic::Expression;
use crate::traits::{Algebraic, MatrixRef};

/// Deepest block nesting a [`Matrix`] may have. A matrix of leaves has
/// depth 1; a matrix whose cells are such matrices has depth 2, and so on.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Dense matrix of [`Element`] cells with runtime dimensions.
///
/// Row-major `Vec<Element>` storage. Cells may be numbers, symbolic
/// expressions or matrices themselves, so a `Matrix` is also a valid cell
/// (block matrices). Cells are never modified after construction: every
/// operation returns a new matrix, and elimination works on its own copy.
///
/// # Examples
///
/// ```
/// use algebris::{Element, Matrix};
///
/// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a.size(), (2, 2));
/// assert_eq!(a[(1, 0)], Element::from(3.0));
///
/// let det = a.determinant().unwrap();
/// assert_eq!(det, Element::from(-2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<Element>,
    nrows: usize,
    ncols: usize,
    depth: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl Matrix {
    /// Create a numeric matrix from a row-major grid literal.
    ///
    /// ```
    /// use algebris::Matrix;
    /// let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// ```
    pub fn new<T: Into<Number>, const M: usize, const N: usize>(rows: [[T; N]; M]) -> Self {
        let data = rows
            .into_iter()
            .flat_map(|row| row.into_iter().map(|x| Element::Numeric(x.into())))
            .collect();
        Self {
            data,
            nrows: M,
            ncols: N,
            depth: 1,
        }
    }

    /// Create a matrix of symbolic expressions from rows.
    pub fn from_expressions(rows: Vec<Vec<Expression>>) -> Result<Self, MatrixError> {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Element::Expression).collect())
                .collect(),
        )
    }

    /// Create a matrix from rows of arbitrary cells.
    ///
    /// Fails with [`MatrixError::InvalidInput`] if the rows differ in length
    /// and with [`MatrixError::NestingTooDeep`] if nested blocks exceed
    /// [`MAX_NESTING_DEPTH`].
    ///
    /// ```
    /// use algebris::{Element, Matrix};
    ///
    /// let block = Matrix::new([[1.0, 0.0], [0.0, 1.0]]);
    /// let m = Matrix::from_rows(vec![
    ///     vec![Element::from(block.clone()), Element::from(2.0)],
    /// ]).unwrap();
    /// assert_eq!(m.depth(), 2);
    ///
    /// assert!(Matrix::from_rows(vec![vec![Element::from(1.0)], vec![]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Element>>) -> Result<Self, MatrixError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != ncols) {
            return Err(MatrixError::InvalidInput("rows differ in length"));
        }
        let data = rows.into_iter().flatten().collect();
        Self::checked(data, nrows, ncols)
    }

    /// Create a matrix from a row-major vector of cells.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<Element>) -> Result<Self, MatrixError> {
        if data.len() != nrows * ncols {
            return Err(MatrixError::InvalidInput(
                "element count does not match dimensions",
            ));
        }
        Self::checked(data, nrows, ncols)
    }

    /// Create a numeric matrix by calling `f(row, col)` for each cell.
    ///
    /// ```
    /// use algebris::{Element, Matrix};
    /// let m = Matrix::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
    /// assert_eq!(m[(1, 2)], Element::from(5.0));
    /// ```
    pub fn from_fn<T: Into<Number>>(
        nrows: usize,
        ncols: usize,
        f: impl Fn(usize, usize) -> T,
    ) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(Element::Numeric(f(i, j).into()));
            }
        }
        Self {
            data,
            nrows,
            ncols,
            depth: 1,
        }
    }

    /// `nrows x ncols` matrix of numeric zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_fn(nrows, ncols, |_, _| Number::ZERO)
    }

    /// `n x n` numeric identity.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { Number::ONE } else { Number::ZERO })
    }

    fn checked(data: Vec<Element>, nrows: usize, ncols: usize) -> Result<Self, MatrixError> {
        let m = Self::from_parts(data, nrows, ncols);
        if m.depth > MAX_NESTING_DEPTH {
            return Err(MatrixError::NestingTooDeep {
                depth: m.depth,
                max: MAX_NESTING_DEPTH,
            });
        }
        Ok(m)
    }

    /// Assemble from cells the crate built itself. Operations only ever
    /// reuse existing blocks, so the nesting bound carries over.
    pub(crate) fn from_parts(data: Vec<Element>, nrows: usize, ncols: usize) -> Self {
        debug_assert_eq!(data.len(), nrows * ncols);
        let depth = 1 + data.iter().map(Element::depth).max().unwrap_or(0);
        Self {
            data,
            nrows,
            ncols,
            depth,
        }
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl Matrix {
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Whether either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0 || self.ncols == 0
    }

    pub fn is_same_size(&self, other: &Matrix) -> bool {
        self.size() == other.size()
    }

    /// Whether every cell is zero. An empty matrix is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(Algebraic::is_zero)
    }

    /// Block nesting depth (1 for a matrix of leaves).
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Cell at `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&Element> {
        if row < self.nrows && col < self.ncols {
            Some(&self.data[row * self.ncols + col])
        } else {
            None
        }
    }

    /// Row `i` as a `1 x ncols` matrix.
    pub fn row(&self, i: usize) -> Option<Matrix> {
        if i >= self.nrows {
            return None;
        }
        let start = i * self.ncols;
        Some(Self::from_parts(
            self.data[start..start + self.ncols].to_vec(),
            1,
            self.ncols,
        ))
    }

    /// Column `j` as an `nrows x 1` matrix.
    pub fn col(&self, j: usize) -> Option<Matrix> {
        if j >= self.ncols {
            return None;
        }
        let data = (0..self.nrows)
            .map(|i| self.data[i * self.ncols + j].clone())
            .collect();
        Some(Self::from_parts(data, self.nrows, 1))
    }

    /// Copy of the cells as nested row vectors.
    pub fn to_rows(&self) -> Vec<Vec<Element>> {
        if self.ncols == 0 {
            return (0..self.nrows).map(|_| Vec::new()).collect();
        }
        self.data.chunks(self.ncols).map(<[Element]>::to_vec).collect()
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> core::slice::Iter<'_, Element> {
        self.data.iter()
    }
}

impl MatrixRef<Element> for Matrix {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &Element {
        &self.data[row * self.ncols + col]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl Index<(usize, usize)> for Matrix {
    type Output = Element;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Element {
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
