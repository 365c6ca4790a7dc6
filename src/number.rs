use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "complex")]
use num_complex::Complex;
#[cfg(feature = "complex")]
use num_traits::{Float, Zero};

use crate::error::MatrixError;
use crate::traits::Algebraic;

/// Numeric leaf value: a real number, or a complex number with the `complex`
/// feature.
///
/// Arithmetic between a real and a complex operand promotes to complex.
/// Equality is exact; a complex value with zero imaginary part equals the
/// real with the same real part.
///
/// ```
/// use algebris::Number;
///
/// let a = Number::from(1.5);
/// let b = Number::from(2.0);
/// assert_eq!(a + b, Number::from(3.5));
/// assert_eq!(b.try_inv().unwrap(), Number::from(0.5));
/// assert_eq!(a.to_string(), "1.50");
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Real(f64),
    #[cfg(feature = "complex")]
    Complex(Complex<f64>),
}

impl Number {
    pub const ZERO: Number = Number::Real(0.0);
    pub const ONE: Number = Number::Real(1.0);

    /// Exact zero test.
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Real(x) => *x == 0.0,
            #[cfg(feature = "complex")]
            Number::Complex(z) => z.is_zero(),
        }
    }

    /// Whether the value has no imaginary component.
    pub fn is_real(&self) -> bool {
        match self {
            Number::Real(_) => true,
            #[cfg(feature = "complex")]
            Number::Complex(z) => z.im == 0.0,
        }
    }

    /// Real part.
    pub fn re(&self) -> f64 {
        match self {
            Number::Real(x) => *x,
            #[cfg(feature = "complex")]
            Number::Complex(z) => z.re,
        }
    }

    /// Imaginary part (`0.0` for reals).
    pub fn im(&self) -> f64 {
        match self {
            Number::Real(_) => 0.0,
            #[cfg(feature = "complex")]
            Number::Complex(z) => z.im,
        }
    }

    /// Scalar coercion: the real part.
    pub fn to_f64(&self) -> f64 {
        self.re()
    }

    /// Multiplicative inverse.
    pub fn try_inv(&self) -> Result<Number, MatrixError> {
        if self.is_zero() {
            return Err(MatrixError::DivisionByZero);
        }
        Ok(match self {
            Number::Real(x) => Number::Real(1.0 / x),
            #[cfg(feature = "complex")]
            Number::Complex(z) => Number::Complex(z.inv()),
        })
    }

    /// `self / rhs`.
    pub fn try_div(&self, rhs: &Number) -> Result<Number, MatrixError> {
        Ok(*self * rhs.try_inv()?)
    }

    #[cfg(feature = "complex")]
    fn to_complex(self) -> Complex<f64> {
        match self {
            Number::Real(x) => Complex::new(x, 0.0),
            Number::Complex(z) => z,
        }
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::Real(x)
    }
}

impl From<i32> for Number {
    fn from(x: i32) -> Self {
        Number::Real(f64::from(x))
    }
}

#[cfg(feature = "complex")]
impl From<Complex<f64>> for Number {
    fn from(z: Complex<f64>) -> Self {
        Number::Complex(z)
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

macro_rules! impl_number_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Number {
            type Output = Number;

            fn $method(self, rhs: Number) -> Number {
                match (self, rhs) {
                    (Number::Real(a), Number::Real(b)) => Number::Real(a $op b),
                    #[cfg(feature = "complex")]
                    (a, b) => Number::Complex(a.to_complex() $op b.to_complex()),
                }
            }
        }
    };
}

impl_number_binop!(Add, add, +);
impl_number_binop!(Sub, sub, -);
impl_number_binop!(Mul, mul, *);

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Real(x) => Number::Real(-x),
            #[cfg(feature = "complex")]
            Number::Complex(z) => Number::Complex(-z),
        }
    }
}

// ── Equality / hashing ──────────────────────────────────────────────

impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        match (self, other) {
            (Number::Real(a), Number::Real(b)) => a == b,
            #[cfg(feature = "complex")]
            (a, b) => a.re() == b.re() && a.im() == b.im(),
        }
    }
}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.re()).hash(state);
        canonical_bits(self.im()).hash(state);
    }
}

/// Bit pattern with `-0.0` folded onto `0.0`, so equal values hash alike.
pub(crate) fn canonical_bits(x: f64) -> u64 {
    if x == 0.0 {
        0
    } else {
        x.to_bits()
    }
}

impl Algebraic for Number {
    fn is_zero(&self) -> bool {
        Number::is_zero(self)
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        Ok(*self + *rhs)
    }

    fn negate(&self) -> Self {
        -*self
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        Ok(*self * *rhs)
    }

    fn try_inv(&self) -> Result<Self, MatrixError> {
        Number::try_inv(self)
    }

    fn to_f64(&self) -> f64 {
        Number::to_f64(self)
    }
}

// ── Formatting ──────────────────────────────────────────────────────

/// Render `x` with at least two and at most three decimals (`#0.00#`).
///
/// `x` is first reduced to 15 significant digits, then rounded half away
/// from zero at the third decimal. Values that round to zero print as `0.00`
/// regardless of sign.
pub(crate) fn fixed(x: f64) -> String {
    if !x.is_finite() {
        return format!("{}", x);
    }
    let sci = format!("{:.14e}", x);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return format!("{:.3}", x),
    };
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    // significant digits left of the cut at 10^-3
    let keep = exponent + 4;
    let mut scaled: Vec<u8> = if keep > 0 {
        let keep = keep as usize;
        let mut kept: Vec<u8> = digits.iter().copied().take(keep).collect();
        kept.resize(keep, 0);
        kept
    } else {
        Vec::new()
    };
    let round_digit = if keep >= 0 {
        digits.get(keep as usize).copied().unwrap_or(0)
    } else {
        0
    };
    if round_digit >= 5 {
        round_up(&mut scaled);
    }

    let negative = x < 0.0 && scaled.iter().any(|&d| d != 0);
    while scaled.len() < 4 {
        scaled.insert(0, 0);
    }
    let split = scaled.len() - 3;
    let first = scaled[..split]
        .iter()
        .position(|&d| d != 0)
        .unwrap_or(split - 1);

    let mut s = String::with_capacity(scaled.len() + 2);
    if negative {
        s.push('-');
    }
    s.extend(scaled[first..split].iter().map(|&d| char::from(b'0' + d)));
    s.push('.');
    s.extend(scaled[split..].iter().map(|&d| char::from(b'0' + d)));
    if s.ends_with('0') {
        s.pop();
    }
    s
}

/// Add one unit in the last place of a decimal digit string.
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Real(x) => f.write_str(&fixed(*x)),
            #[cfg(feature = "complex")]
            Number::Complex(z) => {
                let sign = if z.im < 0.0 { '-' } else { '+' };
                write!(f, "{} {} {}i", fixed(z.re), sign, fixed(Float::abs(z.im)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn fixed_pattern() {
        assert_eq!(fixed(0.5), "0.50");
        assert_eq!(fixed(2.0), "2.00");
        assert_eq!(fixed(-7124.35), "-7124.35");
        assert_eq!(fixed(0.0068357), "0.007");
        assert_eq!(fixed(1.2344), "1.234");
        assert_eq!(fixed(-0.0001), "0.00");
        assert_eq!(fixed(15.0), "15.00");
        assert_eq!(fixed(0.0), "0.00");
        assert_eq!(fixed(-0.0), "0.00");
    }

    #[test]
    fn fixed_rounds_ties_away_from_zero() {
        assert_eq!(fixed(0.0625), "0.063");
        assert_eq!(fixed(1.0625), "1.063");
        assert_eq!(fixed(-0.3125), "-0.313");
        assert_eq!(fixed(0.0005), "0.001");
        assert_eq!(fixed(-0.0005), "-0.001");
        assert_eq!(fixed(0.0004999), "0.00");
        assert_eq!(fixed(9.9995), "10.00");
        assert_eq!(fixed(1e20), "100000000000000000000.00");
    }

    #[test]
    fn real_arithmetic() {
        let a = Number::from(3.0);
        let b = Number::from(4.0);
        assert_eq!(a + b, Number::from(7.0));
        assert_eq!(a - b, Number::from(-1.0));
        assert_eq!(a * b, Number::from(12.0));
        assert_eq!(-a, Number::from(-3.0));
        assert_eq!(b.try_div(&Number::from(2)).unwrap(), Number::from(2.0));
    }

    #[test]
    fn inverse_of_zero() {
        assert_eq!(Number::ZERO.try_inv(), Err(MatrixError::DivisionByZero));
        assert_eq!(
            Number::ONE.try_div(&Number::ZERO),
            Err(MatrixError::DivisionByZero)
        );
    }

    #[test]
    fn zero_equality_ignores_sign() {
        assert_eq!(Number::from(-0.0), Number::ZERO);
    }

    #[cfg(feature = "std")]
    #[test]
    fn signed_zeros_hash_alike() {
        let mut h1 = std_hasher();
        let mut h2 = std_hasher();
        Number::from(-0.0).hash(&mut h1);
        Number::ZERO.hash(&mut h2);
        assert_eq!(h1.finish(), h2.finish());
    }

    #[test]
    fn display() {
        assert_eq!(Number::from(-2.0).to_string(), "-2.00");
    }

    #[cfg(feature = "complex")]
    #[test]
    fn complex_promotion() {
        let z = Number::from(Complex::new(3.0, 1.0));
        let r = Number::from(2.0);
        assert_eq!(z + r, Number::from(Complex::new(5.0, 1.0)));
        assert_eq!(r * z, Number::from(Complex::new(6.0, 2.0)));
        assert_eq!(Number::from(Complex::new(2.0, 0.0)), r);
        assert!(!z.is_real());
        assert_eq!(z.to_f64(), 3.0);
        let inv = z.try_inv().unwrap();
        assert!((inv.re() - 0.3).abs() < 1e-15);
        assert!((inv.im() + 0.1).abs() < 1e-15);
        assert_eq!(z.to_string(), "3.00 + 1.00i");
        assert_eq!(Number::from(Complex::new(1.0, -0.5)).to_string(), "1.00 - 0.50i");
    }

    #[cfg(feature = "std")]
    fn std_hasher() -> std::collections::hash_map::DefaultHasher {
        std::collections::hash_map::DefaultHasher::new()
    }
}
