//! Piecewise rational expressions in one variable, the symbolic leaf of
//! [`Element`](crate::Element).
//!
//! An [`Expression`] is an ordered list of [`Piece`]s, each a ratio of
//! [`Polynomial`]s valid on a closed [`Limit`]. Typical use is a beam
//! deflection or moment line that changes formula at every support.

mod limit;
mod polynomial;

pub use limit::Limit;
pub use polynomial::Polynomial;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};
use core::ops::{Add, Mul, Neg};

use crate::error::MatrixError;
use crate::number::{fixed, Number};
use crate::traits::Algebraic;

// ── Piece ───────────────────────────────────────────────────────────

/// `numerator / denominator` on `limit`.
///
/// A constant denominator is folded into the numerator on construction, so
/// polynomial pieces always carry the denominator `1`.
#[derive(Debug, Clone, PartialEq, Hash)]
pub struct Piece {
    numerator: Polynomial,
    denominator: Polynomial,
    limit: Limit,
}

impl Piece {
    /// Rational piece. Fails with [`MatrixError::DivisionByZero`] if the
    /// denominator is the zero polynomial.
    pub fn new(
        numerator: Polynomial,
        denominator: Polynomial,
        limit: Limit,
    ) -> Result<Self, MatrixError> {
        if denominator.is_zero() {
            return Err(MatrixError::DivisionByZero);
        }
        Ok(Self::normalized(numerator, denominator, limit))
    }

    /// Polynomial piece.
    pub fn polynomial(p: Polynomial, limit: Limit) -> Self {
        Self {
            numerator: p,
            denominator: Polynomial::one(),
            limit,
        }
    }

    fn normalized(numerator: Polynomial, denominator: Polynomial, limit: Limit) -> Self {
        match denominator.constant_value() {
            Some(c) if c != 1.0 => Self::polynomial(numerator.scale(1.0 / c), limit),
            Some(_) => Self::polynomial(numerator, limit),
            None => Self {
                numerator,
                denominator,
                limit,
            },
        }
    }

    pub fn numerator(&self) -> &Polynomial {
        &self.numerator
    }

    pub fn denominator(&self) -> &Polynomial {
        &self.denominator
    }

    pub fn limit(&self) -> Limit {
        self.limit
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.numerator.eval(x) / self.denominator.eval(x)
    }

    fn constant_value(&self) -> Option<f64> {
        if self.denominator.degree() == Some(0) {
            self.numerator.constant_value()
        } else {
            None
        }
    }

    fn with_limit(&self, limit: Limit) -> Self {
        Self {
            limit,
            ..self.clone()
        }
    }

    fn sum(&self, rhs: &Piece, limit: Limit) -> Self {
        if self.denominator == rhs.denominator {
            return Self::normalized(
                &self.numerator + &rhs.numerator,
                self.denominator.clone(),
                limit,
            );
        }
        Self::normalized(
            &(&self.numerator * &rhs.denominator) + &(&rhs.numerator * &self.denominator),
            &self.denominator * &rhs.denominator,
            limit,
        )
    }

    fn product(&self, rhs: &Piece, limit: Limit) -> Self {
        Self::normalized(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
            limit,
        )
    }

    fn add_constant(&self, c: f64) -> Self {
        Self {
            numerator: &self.numerator + &self.denominator.scale(c),
            ..self.clone()
        }
    }

    fn scale(&self, k: f64) -> Self {
        Self {
            numerator: self.numerator.scale(k),
            ..self.clone()
        }
    }

    fn negate(&self) -> Self {
        self.scale(-1.0)
    }

    fn try_inv(&self) -> Result<Self, MatrixError> {
        Piece::new(self.denominator.clone(), self.numerator.clone(), self.limit)
    }

    fn write_function(&self, out: &mut String) -> fmt::Result {
        if self.denominator.degree() == Some(0) {
            write!(out, "{}", self.numerator)
        } else {
            write!(out, "({})/({})", self.numerator, self.denominator)
        }
    }
}

// ── Expression ──────────────────────────────────────────────────────

/// Piecewise rational expression in `x`.
///
/// No pieces means the zero expression. Sums and products are formed over
/// the union of both operands' breakpoints.
///
/// ```
/// use algebris::{Expression, Limit, Polynomial};
///
/// // 3x on [0, 4]
/// let e = Expression::bounded(Polynomial::new(&[0.0, 3.0]), Limit::new(0.0, 4.0));
/// let doubled = &e + &e;
/// assert_eq!(doubled.evaluate(2.0), Some(12.0));
/// assert_eq!(doubled.evaluate(5.0), None);
///
/// let samples = e.evaluate_on_equal_interval(4);
/// assert_eq!(samples.len(), 5);
/// assert_eq!(samples[4], (4.0, 12.0));
/// ```
#[derive(Debug, Clone, PartialEq, Hash, Default)]
pub struct Expression {
    pieces: Vec<Piece>,
}

impl Expression {
    pub fn zero() -> Self {
        Self { pieces: Vec::new() }
    }

    /// The constant `c` everywhere.
    pub fn constant(c: f64) -> Self {
        Self::polynomial(Polynomial::constant(c))
    }

    /// A single polynomial valid everywhere.
    pub fn polynomial(p: Polynomial) -> Self {
        Self::bounded(p, Limit::unbounded())
    }

    /// A single polynomial valid on `limit`.
    pub fn bounded(p: Polynomial, limit: Limit) -> Self {
        Self {
            pieces: vec![Piece::polynomial(p, limit)],
        }
    }

    pub fn from_pieces(pieces: impl IntoIterator<Item = Piece>) -> Self {
        Self {
            pieces: pieces.into_iter().collect(),
        }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// True for the empty expression or when every numerator is zero.
    pub fn is_zero(&self) -> bool {
        self.pieces.iter().all(|p| p.numerator.is_zero())
    }

    /// `Some(c)` for the zero expression or a single unbounded constant piece.
    pub fn as_constant(&self) -> Option<f64> {
        match self.pieces.as_slice() {
            [] => Some(0.0),
            [piece] if !piece.limit.start().is_finite() && !piece.limit.end().is_finite() => {
                piece.constant_value()
            }
            _ => None,
        }
    }

    /// Smallest interval covering every piece.
    pub fn span(&self) -> Option<Limit> {
        let first = self.pieces.first()?.limit;
        Some(self.pieces.iter().fold(first, |acc, p| {
            Limit::new(
                acc.start().min(p.limit.start()),
                acc.end().max(p.limit.end()),
            )
        }))
    }

    /// Value at `x` from the first piece whose limit contains it.
    pub fn evaluate(&self, x: f64) -> Option<f64> {
        self.piece_at(x).map(|p| p.eval(x))
    }

    /// Sample the expression at `divisions + 1` equally spaced locations
    /// across its span, as `(location, value)` pairs.
    ///
    /// Locations no piece covers sample as `0.0`. Returns nothing when the
    /// span is empty or unbounded.
    pub fn evaluate_on_equal_interval(&self, divisions: usize) -> Vec<(f64, f64)> {
        let span = match self.span() {
            Some(span) if span.is_bounded() => span,
            _ => return Vec::new(),
        };
        let (start, end) = (span.start(), span.end());
        if divisions == 0 {
            return vec![(start, self.evaluate(start).unwrap_or(0.0))];
        }
        let step = (end - start) / divisions as f64;
        (0..=divisions)
            .map(|k| {
                let x = if k == divisions {
                    end
                } else {
                    start + step * k as f64
                };
                (x, self.evaluate(x).unwrap_or(0.0))
            })
            .collect()
    }

    /// `self + n`, with `n` treated as the constant expression.
    ///
    /// Breakpoints merge as in expression addition: the pieces of `self`
    /// are shifted by `n`, and every interval they leave uncovered carries
    /// the constant `n` alone.
    pub fn try_add_number(&self, n: &Number) -> Result<Self, MatrixError> {
        let c = real_coefficient(n)?;
        if c == 0.0 {
            return Ok(self.clone());
        }
        Ok(self + &Self::constant(c))
    }

    /// `self · n` on every piece.
    pub fn try_scale(&self, n: &Number) -> Result<Self, MatrixError> {
        let k = real_coefficient(n)?;
        Ok(Self {
            pieces: self.pieces.iter().map(|p| p.scale(k)).collect(),
        })
    }

    /// `1 / self`, piece by piece.
    pub fn try_inv(&self) -> Result<Self, MatrixError> {
        if self.pieces.is_empty() {
            return Err(MatrixError::DivisionByZero);
        }
        Ok(Self {
            pieces: self
                .pieces
                .iter()
                .map(Piece::try_inv)
                .collect::<Result<_, _>>()?,
        })
    }

    pub fn negate(&self) -> Self {
        Self {
            pieces: self.pieces.iter().map(Piece::negate).collect(),
        }
    }

    /// Rendering with one row per piece in Word linear-format cases notation:
    /// `{■(f1&a≤x≤b@f2&b≤x≤c)┤`.
    pub fn to_string_piecewise(&self) -> String {
        match self.pieces.as_slice() {
            [] => String::from("0.00"),
            [piece] if !piece.limit.is_bounded() => {
                let mut out = String::new();
                let _ = piece.write_function(&mut out);
                out
            }
            pieces => {
                let mut out = String::from("{■(");
                for (i, piece) in pieces.iter().enumerate() {
                    if i > 0 {
                        out.push('@');
                    }
                    let _ = piece.write_function(&mut out);
                    let _ = write!(
                        out,
                        "&{}≤x≤{}",
                        fixed(piece.limit.start()),
                        fixed(piece.limit.end())
                    );
                }
                out.push_str(")┤");
                out
            }
        }
    }

    fn piece_at(&self, x: f64) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.limit.contains(x))
    }

    /// Apply `op` on every sub-interval of the merged breakpoints. Where only
    /// one side has a piece, that piece survives if `keep_unmatched` is set.
    fn combine(
        &self,
        rhs: &Expression,
        keep_unmatched: bool,
        op: impl Fn(&Piece, &Piece, Limit) -> Piece,
    ) -> Expression {
        let mut cuts: Vec<f64> = self
            .pieces
            .iter()
            .chain(rhs.pieces.iter())
            .flat_map(|p| [p.limit.start(), p.limit.end()])
            .filter(|x| !x.is_nan())
            .collect();
        cuts.sort_by(|a, b| a.total_cmp(b));
        cuts.dedup();

        let mut pieces = Vec::new();
        for w in cuts.windows(2) {
            let limit = Limit::new(w[0], w[1]);
            let x = limit.sample_point();
            match (self.piece_at(x), rhs.piece_at(x)) {
                (Some(a), Some(b)) => pieces.push(op(a, b, limit)),
                (Some(p), None) | (None, Some(p)) if keep_unmatched => {
                    pieces.push(p.with_limit(limit))
                }
                _ => {}
            }
        }
        Expression { pieces }
    }
}

fn real_coefficient(n: &Number) -> Result<f64, MatrixError> {
    if n.is_real() {
        Ok(n.re())
    } else {
        Err(MatrixError::InvalidInput(
            "expressions carry real coefficients only",
        ))
    }
}

impl Add for &Expression {
    type Output = Expression;
    fn add(self, rhs: &Expression) -> Expression {
        self.combine(rhs, true, Piece::sum)
    }
}

impl Mul for &Expression {
    type Output = Expression;
    fn mul(self, rhs: &Expression) -> Expression {
        self.combine(rhs, false, Piece::product)
    }
}

impl Neg for &Expression {
    type Output = Expression;
    fn neg(self) -> Expression {
        self.negate()
    }
}

impl Algebraic for Expression {
    fn is_zero(&self) -> bool {
        Expression::is_zero(self)
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        Ok(self + rhs)
    }

    fn negate(&self) -> Self {
        Expression::negate(self)
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        Ok(self * rhs)
    }

    fn try_inv(&self) -> Result<Self, MatrixError> {
        Expression::try_inv(self)
    }

    fn to_f64(&self) -> f64 {
        self.as_constant().unwrap_or(0.0)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pieces.is_empty() {
            return f.write_str("0.00");
        }
        let mut out = String::new();
        for (i, piece) in self.pieces.iter().enumerate() {
            if i > 0 {
                out.push_str("; ");
            }
            piece.write_function(&mut out)?;
            if piece.limit.is_bounded() {
                write!(
                    out,
                    ", {} ≤ x ≤ {}",
                    fixed(piece.limit.start()),
                    fixed(piece.limit.end())
                )?;
            }
        }
        f.write_str(&out)
    }
}
