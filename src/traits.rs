use core::fmt::{Debug, Display};

use crate::error::MatrixError;
use crate::tolerance::near_zero;

/// Capability set every matrix cell value provides.
///
/// Implemented by the leaves ([`Number`](crate::Number),
/// [`Expression`](crate::Expression)), by [`Matrix`](crate::Matrix) itself
/// (which makes block matrices possible), by the tagged
/// [`Element`](crate::Element) that dispatches between them, and by `f64` for
/// the [`FlatMatrix`](crate::FlatMatrix) fast path.
///
/// Every operation produces a new value; receivers are never mutated.
/// Arithmetic is fallible because some combinations have no result (adding
/// matrices of different size, inverting zero).
pub trait Algebraic: Clone + PartialEq + Debug + Display {
    /// Additive identity test.
    fn is_zero(&self) -> bool;

    /// `self + rhs`.
    fn try_add(&self, rhs: &Self) -> Result<Self, MatrixError>;

    /// `-self`.
    fn negate(&self) -> Self;

    /// `self * rhs`.
    fn try_mul(&self, rhs: &Self) -> Result<Self, MatrixError>;

    /// Multiplicative inverse. Fails with [`MatrixError::DivisionByZero`] on zero.
    fn try_inv(&self) -> Result<Self, MatrixError>;

    /// Best-effort scalar coercion. Values with no scalar reading yield `0.0`.
    fn to_f64(&self) -> f64;

    /// `self + (-rhs)`.
    fn try_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.try_add(&rhs.negate())
    }

    /// `self * rhs⁻¹`.
    fn try_div(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.try_mul(&rhs.try_inv()?)
    }
}

impl Algebraic for f64 {
    #[inline]
    fn is_zero(&self) -> bool {
        near_zero(*self)
    }

    #[inline]
    fn try_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        Ok(self + rhs)
    }

    #[inline]
    fn negate(&self) -> Self {
        -self
    }

    #[inline]
    fn try_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        Ok(self * rhs)
    }

    #[inline]
    fn try_inv(&self) -> Result<Self, MatrixError> {
        if near_zero(*self) {
            return Err(MatrixError::DivisionByZero);
        }
        Ok(1.0 / self)
    }

    #[inline]
    fn to_f64(&self) -> f64 {
        *self
    }

    #[inline]
    fn try_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        Ok(self - rhs)
    }
}

/// Read-only access to a matrix-like type.
///
/// Lets the elimination skeleton read pivots from both the row-vector
/// representation of a [`Matrix`](crate::Matrix) and the flat buffer of a
/// [`FlatMatrix`](crate::FlatMatrix).
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Mutable access to a matrix-like type.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;
}

/// Row operations driven by Gauss–Jordan elimination.
///
/// The default methods work cell by cell through [`MatrixMut`]; storage with
/// a better row layout overrides them.
pub trait RowOps<T: Algebraic>: MatrixMut<T> {
    /// Exchange rows `a` and `b`.
    fn swap_rows(&mut self, a: usize, b: usize);

    /// `row ← factor · row`.
    ///
    /// The factor multiplies from the left so that row operations stay valid
    /// for cells that do not commute (matrix blocks).
    fn scale_row(&mut self, row: usize, factor: &T) -> Result<(), MatrixError> {
        for col in 0..self.ncols() {
            let value = factor.try_mul(self.get(row, col))?;
            *self.get_mut(row, col) = value;
        }
        Ok(())
    }

    /// `row ← divisor⁻¹ · row`.
    fn div_row(&mut self, row: usize, divisor: &T) -> Result<(), MatrixError> {
        self.scale_row(row, &divisor.try_inv()?)
    }

    /// `target ← target − factor · source`.
    fn sub_scaled_row(
        &mut self,
        target: usize,
        source: usize,
        factor: &T,
    ) -> Result<(), MatrixError> {
        for col in 0..self.ncols() {
            let product = factor.try_mul(self.get(source, col))?;
            let value = self.get(target, col).try_sub(&product)?;
            *self.get_mut(target, col) = value;
        }
        Ok(())
    }
}
