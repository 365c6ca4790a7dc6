//! Gauss–Jordan elimination.
//!
//! One skeleton, [`gauss_jordan_in_place`], runs over any pair of
//! [`RowOps`](crate::traits::RowOps) implementors. [`gauss_jordan`] feeds it
//! the row-vector form of two [`Matrix`](crate::Matrix) values;
//! [`gauss_jordan_flat`] runs it directly on [`FlatMatrix`](crate::FlatMatrix)
//! buffers with tolerance-based zero tests.

mod gauss_jordan;

pub use gauss_jordan::{gauss_jordan, gauss_jordan_flat, gauss_jordan_in_place};
