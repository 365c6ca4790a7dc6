use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Mul, Neg, Sub};

use num_traits::Float;

use crate::number::{canonical_bits, fixed};

/// Dense univariate polynomial in `x` with `f64` coefficients.
///
/// Coefficients are stored in ascending powers with trailing zeros trimmed,
/// so the zero polynomial has no coefficients.
///
/// ```
/// use algebris::Polynomial;
///
/// // 3 - 2x
/// let p = Polynomial::new(&[3.0, -2.0]);
/// assert_eq!(p.eval(4.0), -5.0);
/// assert_eq!(p.degree(), Some(1));
/// assert_eq!(p.to_string(), "3.00 - 2.00x");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Create from coefficients in ascending powers.
    pub fn new(coeffs: &[f64]) -> Self {
        Self::from_vec(coeffs.to_vec())
    }

    /// Create from an owned coefficient vector in ascending powers.
    pub fn from_vec(mut coeffs: Vec<f64>) -> Self {
        while coeffs.last() == Some(&0.0) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    pub fn one() -> Self {
        Self::constant(1.0)
    }

    pub fn constant(c: f64) -> Self {
        Self::from_vec(vec![c])
    }

    /// `coeff · x^degree`.
    ///
    /// # Panics
    ///
    /// Panics if `degree + 1` overflows `usize`.
    pub fn monomial(coeff: f64, degree: usize) -> Self {
        let len = match degree.checked_add(1) {
            Some(len) => len,
            None => panic!("monomial degree {} overflows usize", degree),
        };
        let mut coeffs = vec![0.0; len];
        coeffs[degree] = coeff;
        Self::from_vec(coeffs)
    }

    /// Coefficients in ascending powers.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Degree, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// The value if the polynomial has degree ≤ 0.
    pub fn constant_value(&self) -> Option<f64> {
        match self.coeffs.len() {
            0 => Some(0.0),
            1 => Some(self.coeffs[0]),
            _ => None,
        }
    }

    /// Evaluate at `x` (Horner).
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Multiply every coefficient by `k`.
    pub fn scale(&self, k: f64) -> Self {
        Self::from_vec(self.coeffs.iter().map(|&c| c * k).collect())
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let n = self.coeffs.len().max(rhs.coeffs.len());
        let at = |p: &Self, i: usize| p.coeffs.get(i).copied().unwrap_or(0.0);
        Self::from_vec((0..n).map(|i| f(at(self, i), at(rhs, i))).collect())
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: &Polynomial) -> Polynomial {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let mut out = vec![0.0; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                out[i + j] += a * b;
            }
        }
        Polynomial::from_vec(out)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        self.scale(-1.0)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: Polynomial) -> Polynomial {
        &self + &rhs
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: Polynomial) -> Polynomial {
        &self - &rhs
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        -&self
    }
}

impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coeffs.len().hash(state);
        for &c in &self.coeffs {
            canonical_bits(c).hash(state);
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0.00");
        }
        let mut first = true;
        for (power, &c) in self.coeffs.iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            let magnitude = if first { c } else { Float::abs(c) };
            if !first {
                f.write_str(if c < 0.0 { " - " } else { " + " })?;
            }
            f.write_str(&fixed(magnitude))?;
            match power {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{}", power)?,
            }
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn trims_trailing_zeros() {
        let p = Polynomial::new(&[1.0, 2.0, 0.0, 0.0]);
        assert_eq!(p.degree(), Some(1));
        assert_eq!(Polynomial::new(&[0.0]).degree(), None);
        assert!(Polynomial::new(&[0.0, 0.0]).is_zero());
    }

    #[test]
    fn arithmetic() {
        // (1 + x)(1 - x) = 1 - x^2
        let a = Polynomial::new(&[1.0, 1.0]);
        let b = Polynomial::new(&[1.0, -1.0]);
        assert_eq!(&a * &b, Polynomial::new(&[1.0, 0.0, -1.0]));
        assert_eq!(&a + &b, Polynomial::constant(2.0));
        assert_eq!(&a - &a, Polynomial::zero());
        assert_eq!(-&a, Polynomial::new(&[-1.0, -1.0]));
        assert_eq!(&a * &Polynomial::zero(), Polynomial::zero());
    }

    #[test]
    fn evaluation() {
        // 0 + 63/5 x - 1/15 x^3
        let p = Polynomial::new(&[0.0, 63.0 / 5.0, 0.0, -1.0 / 15.0]);
        assert!((p.eval(3.0) - (37.8 - 1.8)).abs() < 1e-12);
        assert_eq!(Polynomial::monomial(2.0, 3).eval(2.0), 16.0);
    }

    #[test]
    fn display() {
        assert_eq!(Polynomial::new(&[0.0, 2.0, 0.0, -0.5]).to_string(), "2.00x - 0.50x^3");
        assert_eq!(Polynomial::new(&[-1.0, 1.0]).to_string(), "-1.00 + 1.00x");
        assert_eq!(Polynomial::zero().to_string(), "0.00");
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn monomial_degree_overflow_panics() {
        let _ = Polynomial::monomial(1.0, usize::MAX);
    }
}
