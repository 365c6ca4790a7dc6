use alloc::string::String;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::element::Element;
use crate::matrix::util::{write_plain, write_word_math};
use crate::matrix::Matrix;
use crate::number::fixed;
use crate::tolerance::near_eq;

use super::FlatMatrix;

impl FlatMatrix {
    /// Render in the Word equation linear format: `[■(a&b@c&d)]`.
    pub fn to_word_math_string(&self) -> String {
        let mut out = String::new();
        write_word_math(self, &mut out, |&x, out| out.push_str(&fixed(x)));
        out
    }
}

/// Cells compare within [`EPSILON`](crate::tolerance::EPSILON).
impl PartialEq for FlatMatrix {
    fn eq(&self, other: &FlatMatrix) -> bool {
        self.is_same_size(other)
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| near_eq(a, b))
    }
}

/// Shape only, so values equal within tolerance hash alike.
impl Hash for FlatMatrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nrows.hash(state);
        self.ncols.hash(state);
    }
}

impl fmt::Display for FlatMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_plain(self, f, |&x, f| f.write_str(&fixed(x)))
    }
}

impl From<&FlatMatrix> for Matrix {
    fn from(m: &FlatMatrix) -> Self {
        Matrix::from_parts(
            m.data.iter().map(|&x| Element::from(x)).collect(),
            m.nrows,
            m.ncols,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn tolerant_equality() {
        let a = FlatMatrix::new([[1.0, 2.0]]);
        assert_eq!(a, FlatMatrix::new([[1.0 + 1e-12, 2.0 - 1e-12]]));
        assert_ne!(a, FlatMatrix::new([[1.0, 2.001]]));
        assert_ne!(a, FlatMatrix::new([[1.0], [2.0]]));
    }

    #[test]
    fn text_forms() {
        let a = FlatMatrix::new([[0.5, -2.0], [15.0, 2.1]]);
        assert_eq!(a.to_string(), "[0.50, -2.00]\n[15.00, 2.10]");
        assert_eq!(a.to_word_math_string(), "[■(0.50&-2.00@15.00&2.10)]");
    }

    #[test]
    fn into_generic_matrix() {
        let a = FlatMatrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let m = Matrix::from(&a);
        assert_eq!(m, Matrix::new([[1.0, 2.0], [3.0, 4.0]]));
        assert_eq!(m.to_flat(), a);
    }
}
