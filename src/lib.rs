//! # algebris
//!
//! Linear algebra over heterogeneous cells, no-std compatible (needs
//! `alloc`). A matrix cell may hold a number, a piecewise symbolic
//! expression, or another matrix, and the same Gauss–Jordan elimination
//! inverts and solves all of them.
//!
//! ## Quick start
//!
//! ```
//! use algebris::{Algebraic, Matrix};
//!
//! // Solve a linear system Ax = b
//! let a = Matrix::new([
//!     [2.0, 1.0, -1.0],
//!     [-3.0, -1.0, 2.0],
//!     [-2.0, 1.0, 2.0],
//! ]);
//! let b = Matrix::new([[8.0], [-11.0], [-3.0]]);
//! let x = a.solve(&b).unwrap(); // x = [2, 3, -1]
//! assert!((x[(0, 0)].to_f64() - 2.0).abs() < 1e-12);
//! assert!((x[(2, 0)].to_f64() + 1.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: `Matrix`, a dense grid of [`Element`] cells with runtime
//!   dimensions. Row-major storage. Arithmetic, transpose, block-aware
//!   `to_unit`/`to_zero`, cofactor determinant, inverse and solve. A
//!   `Matrix` is itself an `Element`, which gives block matrices.
//!
//! - [`element`]: `Element`, the tagged cell value {Numeric, Expression,
//!   Matrix} and the dispatch rules for mixed-variant arithmetic.
//!
//! - [`number`] / [`symbolic`]: the leaves. `Number` is real, or complex with
//!   the `complex` feature. `Expression` is a piecewise rational function of
//!   `x` built from [`Polynomial`] pieces on [`Limit`] intervals.
//!
//! - [`linalg`]: Gauss–Jordan elimination. [`linalg::gauss_jordan_in_place`]
//!   runs on `&mut impl RowOps<T>`; [`linalg::gauss_jordan`] and
//!   [`linalg::gauss_jordan_flat`] wrap it for the two matrix types.
//!
//! - [`flat`]: `FlatMatrix`, the `f64` fast path with tolerance-based zero
//!   tests and equality. Same operations as `Matrix`, no blocks.
//!
//! - [`traits`]: the cell contract and matrix access:
//!   - [`Algebraic`]: fallible add/mul/inverse, negation, zero test, scalar
//!     coercion
//!   - [`MatrixRef`] / [`MatrixMut`]: generic read/write access
//!   - [`RowOps`]: row swaps and row arithmetic used by elimination
//!
//! - [`tolerance`]: the [`tolerance::EPSILON`] used by the fast path.
//!
//! ## Logging
//!
//! Elimination emits `trace`-level records through the [`log`] facade
//! (pivot swaps, singular columns). Install any `log` backend to see them.
//!
//! ## Cargo features
//!
//! | Feature   | Default | Description |
//! |-----------|---------|-------------|
//! | `std`     | yes     | `std::error::Error` for [`MatrixError`] |
//! | `complex` | yes     | `Complex<f64>` numbers via `num-complex` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod element;
pub mod error;
pub mod flat;
pub mod linalg;
pub mod matrix;
pub mod number;
pub mod symbolic;
pub mod tolerance;
pub mod traits;

pub use element::Element;
pub use error::MatrixError;
pub use flat::FlatMatrix;
pub use matrix::Matrix;
pub use number::Number;
pub use symbolic::{Expression, Limit, Piece, Polynomial};
pub use traits::{Algebraic, MatrixMut, MatrixRef, RowOps};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
