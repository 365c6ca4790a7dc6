use core::fmt;
use core::hash::{Hash, Hasher};

use crate::number::{canonical_bits, fixed};

/// Closed interval `[start, end]` on which an expression piece is defined.
///
/// Endpoints are ordered on construction. Infinite endpoints describe an
/// unbounded piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limit {
    start: f64,
    end: f64,
}

impl Limit {
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// `(-∞, ∞)`.
    pub fn unbounded() -> Self {
        Self {
            start: f64::NEG_INFINITY,
            end: f64::INFINITY,
        }
    }

    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn is_bounded(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    pub fn contains(&self, x: f64) -> bool {
        self.start <= x && x <= self.end
    }

    /// An interior point usable to decide which piece covers this interval.
    pub(crate) fn sample_point(&self) -> f64 {
        match (self.start.is_finite(), self.end.is_finite()) {
            (true, true) => 0.5 * (self.start + self.end),
            (true, false) => self.start + 1.0,
            (false, true) => self.end - 1.0,
            (false, false) => 0.0,
        }
    }
}

impl Hash for Limit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.start).hash(state);
        canonical_bits(self.end).hash(state);
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", fixed(self.start), fixed(self.end))
    }
}
