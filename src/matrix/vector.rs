use alloc::vec::Vec;

use crate::error::MatrixError;
use crate::traits::Algebraic;

/// One matrix row held as its own vector during elimination.
///
/// Row operations replace whole rows, which keeps the per-pivot work to
/// one allocation per touched row.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RowVector<T> {
    cells: Vec<T>,
}

impl<T: Algebraic> RowVector<T> {
    pub fn new(cells: Vec<T>) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn get(&self, i: usize) -> &T {
        &self.cells[i]
    }

    #[inline]
    pub fn get_mut(&mut self, i: usize) -> &mut T {
        &mut self.cells[i]
    }

    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }

    fn zip_with(
        &self,
        rhs: &Self,
        f: impl Fn(&T, &T) -> Result<T, MatrixError>,
    ) -> Result<Self, MatrixError> {
        if self.len() != rhs.len() {
            return Err(MatrixError::DimensionMismatch {
                left: (1, self.len()),
                right: (1, rhs.len()),
            });
        }
        let cells = self
            .cells
            .iter()
            .zip(&rhs.cells)
            .map(|(a, b)| f(a, b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cells })
    }

    pub fn try_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_with(rhs, |a, b| a.try_add(b))
    }

    pub fn try_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.try_add(&rhs.negate())
    }

    pub fn negate(&self) -> Self {
        Self {
            cells: self.cells.iter().map(|c| c.negate()).collect(),
        }
    }

    /// `factor · cell` for every cell.
    pub fn try_scale(&self, factor: &T) -> Result<Self, MatrixError> {
        let cells = self
            .cells
            .iter()
            .map(|c| factor.try_mul(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cells })
    }

    /// `divisor⁻¹ · cell` for every cell.
    pub fn try_div(&self, divisor: &T) -> Result<Self, MatrixError> {
        self.try_scale(&divisor.try_inv()?)
    }
}
