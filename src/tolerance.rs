//! Absolute floating-point tolerance used by the [`FlatMatrix`](crate::FlatMatrix)
//! fast path and by the `f64` implementation of [`Algebraic`](crate::Algebraic).
//!
//! The generic [`Matrix`](crate::Matrix) never consults these helpers: its
//! leaves compare exactly.

use num_traits::Float;

/// Absolute tolerance for zero tests and equality on primitive floats.
pub const EPSILON: f64 = 1e-10;

/// `|x| < EPSILON`.
///
/// ```
/// use algebris::tolerance::near_zero;
/// assert!(near_zero(1e-12));
/// assert!(!near_zero(1e-8));
/// ```
#[inline]
pub fn near_zero(x: f64) -> bool {
    Float::abs(x) < EPSILON
}

/// `|a - b| < EPSILON`.
#[inline]
pub fn near_eq(a: f64, b: f64) -> bool {
    Float::abs(a - b) < EPSILON
}
