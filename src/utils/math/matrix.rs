use serde::{Deserialize, Serialize};

/// Dense row-major matrix of TF-P weights, documents × vocabulary.
///
/// The corpora this crate targets are small, so a flat buffer with an
/// explicit column stride is enough; the representation is kept behind
/// this type so a sparse container could replace it later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfpMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl TfpMatrix {
    /// Create a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Borrow row `i` as a slice of length `cols`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate over rows in document order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Sum of each row, in document order.
    pub fn row_sums(&self) -> Vec<f64> {
        (0..self.rows).map(|i| self.row(i).iter().sum()).collect()
    }

    /// Multiply every entry of row `i` by `factor`.
    pub fn scale_row(&mut self, i: usize, factor: f64) {
        for v in self.row_mut(i) {
            *v *= factor;
        }
    }

    /// Mutable access to the whole buffer, chunked by row.
    /// Row slices are disjoint, so callers may fill them in parallel.
    pub(crate) fn par_rows_mut(&mut self) -> rayon::slice::ChunksMut<'_, f64> {
        use rayon::prelude::*;
        self.data.par_chunks_mut(self.cols.max(1))
    }
}
