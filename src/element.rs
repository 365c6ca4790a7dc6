use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Neg;

#[cfg(feature = "complex")]
use num_complex::Complex;

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::number::Number;
use crate::symbolic::Expression;
use crate::traits::Algebraic;

/// A matrix cell: a number, a symbolic expression, or a nested matrix.
///
/// Binary operations on two different variants are resolved by the variant
/// with authority over the mix: a leaf combined with a matrix is handled by
/// the matrix, a number combined with an expression by the expression.
///
/// - leaf `+` matrix: the leaf is promoted to a 1×1 matrix and added, which
///   only succeeds if the matrix is 1×1 as well;
/// - leaf `·` matrix: the leaf scales every cell;
/// - number `+`/`·` expression: applied to every piece of the expression.
///
/// ```
/// use algebris::{Element, Matrix, Algebraic};
///
/// let two = Element::from(2.0);
/// let m = Element::from(Matrix::new([[1.0, 2.0], [3.0, 4.0]]));
///
/// let scaled = two.try_mul(&m).unwrap();
/// assert_eq!(scaled, Element::from(Matrix::new([[2.0, 4.0], [6.0, 8.0]])));
/// assert!(two.try_add(&m).is_err());
/// ```
#[derive(Debug, Clone)]
pub enum Element {
    Numeric(Number),
    Expression(Expression),
    Matrix(Matrix),
}

impl Element {
    /// Nested matrix, if this cell holds one.
    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Element::Matrix(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Element::Numeric(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Element::Expression(e) => Some(e),
            _ => None,
        }
    }

    /// Block nesting depth: 0 for leaves.
    pub fn depth(&self) -> usize {
        match self {
            Element::Matrix(m) => m.depth(),
            _ => 0,
        }
    }

    /// Sum of possibly absent operands.
    ///
    /// An absent operand is the additive identity, so the other operand is
    /// returned unchanged; two absent operands give no result.
    pub fn add_optional(
        a: Option<&Element>,
        b: Option<&Element>,
    ) -> Result<Option<Element>, MatrixError> {
        match (a, b) {
            (Some(a), Some(b)) => a.try_add(b).map(Some),
            (Some(x), None) | (None, Some(x)) => Ok(Some(x.clone())),
            (None, None) => Ok(None),
        }
    }

    /// Product of possibly absent operands: no result if either is absent.
    pub fn mul_optional(
        a: Option<&Element>,
        b: Option<&Element>,
    ) -> Result<Option<Element>, MatrixError> {
        match (a, b) {
            (Some(a), Some(b)) => a.try_mul(b).map(Some),
            _ => Ok(None),
        }
    }

    fn constant_of(e: &Expression) -> Option<Number> {
        e.as_constant().map(Number::Real)
    }
}

impl Algebraic for Element {
    fn is_zero(&self) -> bool {
        match self {
            Element::Numeric(n) => n.is_zero(),
            Element::Expression(e) => e.is_zero(),
            Element::Matrix(m) => m.is_zero(),
        }
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        match (self, rhs) {
            (Element::Numeric(a), Element::Numeric(b)) => Ok(Element::Numeric(*a + *b)),
            (Element::Expression(a), Element::Expression(b)) => Ok(Element::Expression(a + b)),
            (Element::Expression(e), Element::Numeric(n)) => {
                Ok(Element::Expression(e.try_add_number(n)?))
            }
            (Element::Matrix(m), other) => Ok(Element::Matrix(m.try_add_element(other)?)),
            // the other operand owns the mixed case
            (_, Element::Expression(_)) | (_, Element::Matrix(_)) => rhs.try_add(self),
        }
    }

    fn negate(&self) -> Self {
        match self {
            Element::Numeric(n) => Element::Numeric(-*n),
            Element::Expression(e) => Element::Expression(e.negate()),
            Element::Matrix(m) => Element::Matrix(m.negate()),
        }
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        match (self, rhs) {
            (Element::Numeric(a), Element::Numeric(b)) => Ok(Element::Numeric(*a * *b)),
            (Element::Expression(a), Element::Expression(b)) => Ok(Element::Expression(a * b)),
            (Element::Expression(e), Element::Numeric(n)) => Ok(Element::Expression(e.try_scale(n)?)),
            (Element::Matrix(a), Element::Matrix(b)) => Ok(Element::Matrix(a.try_mul(b)?)),
            (Element::Matrix(m), leaf) => Ok(Element::Matrix(m.scale(leaf)?)),
            (_, Element::Expression(_)) | (_, Element::Matrix(_)) => rhs.try_mul(self),
        }
    }

    fn try_inv(&self) -> Result<Self, MatrixError> {
        match self {
            Element::Numeric(n) => n.try_inv().map(Element::Numeric),
            Element::Expression(e) => e.try_inv().map(Element::Expression),
            Element::Matrix(m) => m.inverse().map(Element::Matrix),
        }
    }

    fn to_f64(&self) -> f64 {
        match self {
            Element::Numeric(n) => n.to_f64(),
            Element::Expression(e) => Algebraic::to_f64(e),
            Element::Matrix(_) => 0.0,
        }
    }
}

impl Neg for &Element {
    type Output = Element;
    fn neg(self) -> Element {
        self.negate()
    }
}

impl Neg for Element {
    type Output = Element;
    fn neg(self) -> Element {
        self.negate()
    }
}

// ── Equality / hashing ──────────────────────────────────────────────

impl PartialEq for Element {
    fn eq(&self, other: &Element) -> bool {
        match (self, other) {
            (Element::Numeric(a), Element::Numeric(b)) => a == b,
            (Element::Expression(a), Element::Expression(b)) => a == b,
            (Element::Expression(e), Element::Numeric(n))
            | (Element::Numeric(n), Element::Expression(e)) => {
                Element::constant_of(e).as_ref() == Some(n)
            }
            (Element::Matrix(a), Element::Matrix(b)) => a == b,
            _ => false,
        }
    }
}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Element::Numeric(n) => n.hash(state),
            Element::Expression(e) => match Element::constant_of(e) {
                Some(n) => n.hash(state),
                None => e.hash(state),
            },
            Element::Matrix(m) => m.hash(state),
        }
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl From<f64> for Element {
    fn from(x: f64) -> Self {
        Element::Numeric(Number::Real(x))
    }
}

impl From<Number> for Element {
    fn from(n: Number) -> Self {
        Element::Numeric(n)
    }
}

#[cfg(feature = "complex")]
impl From<Complex<f64>> for Element {
    fn from(z: Complex<f64>) -> Self {
        Element::Numeric(Number::Complex(z))
    }
}

impl From<Expression> for Element {
    fn from(e: Expression) -> Self {
        Element::Expression(e)
    }
}

impl From<Matrix> for Element {
    fn from(m: Matrix) -> Self {
        Element::Matrix(m)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Numeric(n) => n.fmt(f),
            Element::Expression(e) => e.fmt(f),
            Element::Matrix(m) => m.fmt(f),
        }
    }
}
