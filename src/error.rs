/// Errors from matrix construction, arithmetic and elimination.
///
/// Every fallible operation in the crate reports through this enum; nothing
/// is retried or recovered internally, and no partially built matrix is ever
/// returned alongside an error.
///
/// ```
/// use algebris::{Matrix, MatrixError};
///
/// let singular = Matrix::new([[1.0, 0.0], [0.0, 0.0]]);
/// assert_eq!(singular.inverse().unwrap_err(), MatrixError::Singular);
///
/// let a = Matrix::new([[1.0, 2.0]]);
/// assert!(matches!(a.try_mul(&a), Err(MatrixError::NotConformable { .. })));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Constructor input is malformed (ragged grid, wrong element count,
    /// or a value the receiving type cannot represent).
    InvalidInput(&'static str),
    /// Operands must have the same size (or the same row count for elimination).
    DimensionMismatch {
        /// `(rows, cols)` of the left operand.
        left: (usize, usize),
        /// `(rows, cols)` of the right operand.
        right: (usize, usize),
    },
    /// Inner dimensions of a matrix product disagree.
    NotConformable {
        /// `(rows, cols)` of the left factor.
        left: (usize, usize),
        /// `(rows, cols)` of the right factor.
        right: (usize, usize),
    },
    /// Determinant, inverse or elimination on a non-square matrix.
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },
    /// A zero-sized matrix where a non-empty one is required.
    InvalidShape {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },
    /// No non-zero pivot exists; the matrix has no inverse.
    Singular,
    /// Cell or minor index outside the matrix.
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Row count of the matrix.
        rows: usize,
        /// Column count of the matrix.
        cols: usize,
    },
    /// Multiplicative inverse of a zero value.
    DivisionByZero,
    /// Block matrices nested deeper than [`crate::matrix::MAX_NESTING_DEPTH`].
    NestingTooDeep {
        /// Depth of the rejected matrix.
        depth: usize,
        /// Maximum permitted depth.
        max: usize,
    },
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            MatrixError::DimensionMismatch { left, right } => write!(
                f,
                "dimension mismatch: {}x{} and {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::NotConformable { left, right } => write!(
                f,
                "matrices {}x{} and {}x{} are not conformable",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::NotSquare { rows, cols } => {
                write!(f, "matrix {}x{} is not square", rows, cols)
            }
            MatrixError::InvalidShape { rows, cols } => {
                write!(f, "matrix {}x{} is empty", rows, cols)
            }
            MatrixError::Singular => write!(f, "matrix is singular"),
            MatrixError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "index ({}, {}) out of range for {}x{} matrix",
                row, col, rows, cols
            ),
            MatrixError::DivisionByZero => write!(f, "division by zero"),
            MatrixError::NestingTooDeep { depth, max } => {
                write!(f, "block nesting depth {} exceeds {}", depth, max)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages() {
        assert_eq!(MatrixError::Singular.to_string(), "matrix is singular");
        assert_eq!(
            MatrixError::NotConformable {
                left: (2, 3),
                right: (2, 3)
            }
            .to_string(),
            "matrices 2x3 and 2x3 are not conformable"
        );
        assert_eq!(
            MatrixError::IndexOutOfRange {
                row: 4,
                col: 0,
                rows: 2,
                cols: 2
            }
            .to_string(),
            "index (4, 0) out of range for 2x2 matrix"
        );
    }
}
