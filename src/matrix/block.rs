use crate::element::Element;

use super::Matrix;

impl Matrix {
    /// Multiplicative identity of the same shape.
    ///
    /// Leaf cells become `1` on the leading diagonal and `0` elsewhere. A
    /// cell holding a sub-matrix becomes that sub-matrix's own unit on the
    /// diagonal and its zero elsewhere, so block matrices get a block
    /// identity.
    ///
    /// ```
    /// use algebris::{Element, Matrix};
    ///
    /// let block = Element::from(Matrix::new([[5.0, 6.0], [7.0, 8.0]]));
    /// let m = Matrix::from_rows(vec![
    ///     vec![block.clone(), block.clone()],
    ///     vec![block.clone(), block],
    /// ]).unwrap();
    ///
    /// let unit = m.to_unit();
    /// assert_eq!(unit[(0, 0)], Element::from(Matrix::identity(2)));
    /// assert_eq!(unit[(0, 1)], Element::from(Matrix::zeros(2, 2)));
    /// ```
    pub fn to_unit(&self) -> Matrix {
        let mut data = alloc::vec::Vec::with_capacity(self.data.len());
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                let cell = &self.data[i * self.ncols + j];
                data.push(match (cell, i == j) {
                    (Element::Matrix(m), true) => Element::Matrix(m.to_unit()),
                    (Element::Matrix(m), false) => Element::Matrix(m.to_zero()),
                    (_, true) => Element::from(1.0),
                    (_, false) => Element::from(0.0),
                });
            }
        }
        Matrix::from_parts(data, self.nrows, self.ncols)
    }

    /// Additive identity of the same shape, recursing into block cells.
    pub fn to_zero(&self) -> Matrix {
        let data = self
            .data
            .iter()
            .map(|cell| match cell {
                Element::Matrix(m) => Element::Matrix(m.to_zero()),
                _ => Element::from(0.0),
            })
            .collect();
        Matrix::from_parts(data, self.nrows, self.ncols)
    }
}
