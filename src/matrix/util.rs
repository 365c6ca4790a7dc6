use alloc::string::String;
use core::fmt::{self, Write as _};
use core::hash::{Hash, Hasher};

use crate::element::Element;
use crate::flat::FlatMatrix;
use crate::traits::{Algebraic, MatrixRef};

use super::Matrix;

// ── Text forms ──────────────────────────────────────────────────────

/// Plain form: one `[c0, c1, ...]` line per row.
pub(crate) fn write_plain<T, W: fmt::Write>(
    m: &impl MatrixRef<T>,
    out: &mut W,
    cell: impl Fn(&T, &mut W) -> fmt::Result,
) -> fmt::Result {
    for i in 0..m.nrows() {
        if i > 0 {
            out.write_char('\n')?;
        }
        out.write_char('[')?;
        for j in 0..m.ncols() {
            if j > 0 {
                out.write_str(", ")?;
            }
            cell(m.get(i, j), out)?;
        }
        out.write_char(']')?;
    }
    Ok(())
}

/// Word linear-format form: `[■(a&b@c&d)]`.
pub(crate) fn write_word_math<T>(
    m: &impl MatrixRef<T>,
    out: &mut String,
    cell: impl Fn(&T, &mut String),
) {
    out.push_str("[■(");
    for i in 0..m.nrows() {
        if i > 0 {
            out.push('@');
        }
        for j in 0..m.ncols() {
            if j > 0 {
                out.push('&');
            }
            cell(m.get(i, j), out);
        }
    }
    out.push_str(")]");
}

impl Matrix {
    /// Render in the Word equation linear format, rows separated by `@`
    /// and cells by `&`. Nested matrices render the same way.
    ///
    /// ```
    /// use algebris::Matrix;
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.5]]);
    /// assert_eq!(m.to_word_math_string(), "[■(1.00&2.00@3.00&4.50)]");
    /// ```
    pub fn to_word_math_string(&self) -> String {
        let mut out = String::new();
        self.write_word_math_cells(&mut out, false);
        out
    }

    /// Like [`to_word_math_string`](Self::to_word_math_string), with
    /// expression cells in their piecewise-cases rendering.
    pub fn to_word_math_string_piecewise(&self) -> String {
        let mut out = String::new();
        self.write_word_math_cells(&mut out, true);
        out
    }

    fn write_word_math_cells(&self, out: &mut String, piecewise: bool) {
        write_word_math(self, out, |cell, out| match cell {
            Element::Matrix(m) => m.write_word_math_cells(out, piecewise),
            Element::Expression(e) if piecewise => out.push_str(&e.to_string_piecewise()),
            other => {
                // writing into a String cannot fail
                let _ = write!(out, "{}", other);
            }
        });
    }

    /// Best-effort numeric copy, each cell coerced with
    /// [`Algebraic::to_f64`].
    pub fn to_flat(&self) -> FlatMatrix {
        FlatMatrix::from_parts(
            self.data.iter().map(Algebraic::to_f64).collect(),
            self.nrows,
            self.ncols,
        )
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_plain(self, f, |cell, f| write!(f, "{}", cell))
    }
}

impl Hash for Matrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nrows.hash(state);
        self.ncols.hash(state);
        for cell in &self.data {
            cell.hash(state);
        }
    }
}
