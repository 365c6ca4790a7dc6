use alloc::vec::Vec;

use log::trace;

use crate::element::Element;
use crate::error::MatrixError;
use crate::flat::FlatMatrix;
use crate::matrix::{Matrix, RowVector};
use crate::traits::{Algebraic, MatrixMut, MatrixRef, RowOps};

fn check_system(left: (usize, usize), right: (usize, usize)) -> Result<(), MatrixError> {
    if left.0 != left.1 {
        return Err(MatrixError::NotSquare {
            rows: left.0,
            cols: left.1,
        });
    }
    if left.0 != right.0 {
        return Err(MatrixError::DimensionMismatch { left, right });
    }
    if left.0 == 0 || right.1 == 0 {
        return Err(MatrixError::InvalidShape {
            rows: right.0,
            cols: right.1,
        });
    }
    Ok(())
}

/// Reduce `left` to the identity, applying every row operation to `right`
/// as well. On success `right` holds `left⁻¹ · right`.
///
/// Pivots are taken in order down the diagonal. A zero pivot is replaced by
/// the first row below it with a non-zero entry in the pivot column; the
/// pivot row is then divided by the pivot and subtracted from every other
/// row with a non-zero entry in that column.
///
/// Fails with [`MatrixError::NotSquare`] if `left` is not square,
/// [`MatrixError::DimensionMismatch`] if the row counts differ,
/// [`MatrixError::InvalidShape`] for empty operands and
/// [`MatrixError::Singular`] if a pivot column has no non-zero entry. Both
/// operands are left partially reduced on error.
pub fn gauss_jordan_in_place<T: Algebraic>(
    left: &mut impl RowOps<T>,
    right: &mut impl RowOps<T>,
) -> Result<(), MatrixError> {
    check_system(
        (left.nrows(), left.ncols()),
        (right.nrows(), right.ncols()),
    )?;
    let n = left.nrows();

    for lead in 0..n {
        if left.get(lead, lead).is_zero() {
            let Some(swap) = (lead + 1..n).find(|&row| !left.get(row, lead).is_zero()) else {
                trace!("no pivot in column {} of {}x{} system", lead, n, n);
                return Err(MatrixError::Singular);
            };
            trace!("pivot swap: rows {} and {}", lead, swap);
            left.swap_rows(lead, swap);
            right.swap_rows(lead, swap);
        }

        let pivot = left.get(lead, lead).clone();
        left.div_row(lead, &pivot)?;
        right.div_row(lead, &pivot)?;

        for row in (0..n).filter(|&row| row != lead) {
            let factor = left.get(row, lead).clone();
            if factor.is_zero() {
                continue;
            }
            left.sub_scaled_row(row, lead, &factor)?;
            right.sub_scaled_row(row, lead, &factor)?;
        }
    }
    Ok(())
}

/// Solve `left · x = right` for matrices of arbitrary cells.
///
/// ```
/// use algebris::{linalg::gauss_jordan, Matrix};
///
/// let a = Matrix::new([[0.0, 1.0], [2.0, 0.0]]);
/// let b = Matrix::new([[3.0], [4.0]]);
/// assert_eq!(gauss_jordan(&a, &b).unwrap(), Matrix::new([[2.0], [3.0]]));
/// ```
pub fn gauss_jordan(left: &Matrix, right: &Matrix) -> Result<Matrix, MatrixError> {
    let mut l = RowMatrix::from_matrix(left);
    let mut r = RowMatrix::from_matrix(right);
    gauss_jordan_in_place(&mut l, &mut r)?;
    Ok(r.into_matrix())
}

/// Solve `left · x = right` on the `f64` fast path.
pub fn gauss_jordan_flat(left: &FlatMatrix, right: &FlatMatrix) -> Result<FlatMatrix, MatrixError> {
    let mut l = left.clone();
    let mut r = right.clone();
    gauss_jordan_in_place(&mut l, &mut r)?;
    Ok(r)
}

// ── Row-vector form of a Matrix ─────────────────────────────────────

struct RowMatrix {
    rows: Vec<RowVector<Element>>,
    ncols: usize,
}

impl RowMatrix {
    fn from_matrix(m: &Matrix) -> Self {
        Self {
            rows: m.to_rows().into_iter().map(RowVector::new).collect(),
            ncols: m.ncols(),
        }
    }

    fn into_matrix(self) -> Matrix {
        let nrows = self.rows.len();
        let data = self.rows.into_iter().flat_map(RowVector::into_cells).collect();
        Matrix::from_parts(data, nrows, self.ncols)
    }
}

impl MatrixRef<Element> for RowMatrix {
    fn nrows(&self) -> usize {
        self.rows.len()
    }

    fn ncols(&self) -> usize {
        self.ncols
    }

    fn get(&self, row: usize, col: usize) -> &Element {
        self.rows[row].get(col)
    }
}

impl MatrixMut<Element> for RowMatrix {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut Element {
        self.rows[row].get_mut(col)
    }
}

impl RowOps<Element> for RowMatrix {
    fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    fn scale_row(&mut self, row: usize, factor: &Element) -> Result<(), MatrixError> {
        self.rows[row] = self.rows[row].try_scale(factor)?;
        Ok(())
    }

    fn div_row(&mut self, row: usize, divisor: &Element) -> Result<(), MatrixError> {
        self.rows[row] = self.rows[row].try_div(divisor)?;
        Ok(())
    }

    fn sub_scaled_row(
        &mut self,
        target: usize,
        source: usize,
        factor: &Element,
    ) -> Result<(), MatrixError> {
        let scaled = self.rows[source].try_scale(factor)?;
        self.rows[target] = self.rows[target].try_sub(&scaled)?;
        Ok(())
    }
}
