//! Read-only rectangular windows over a sparse matrix.

use std::fmt;

use crate::config::options::FragmentOptions;
use crate::matrix::sparse::SparseMatrix;

/// A `nrows × ncols` window of a [`SparseMatrix`], built by
/// [`SparseMatrix::fragment`].
///
/// Indices passed to [`Fragment::get`] are relative to the window's top-left
/// corner. Displaying a fragment writes one line per row with values joined by
/// the configured separator.
pub struct Fragment<'a, T> {
    matrix: &'a SparseMatrix<T>,
    row_start: usize,
    col_start: usize,
    nrows: usize,
    ncols: usize,
    separator: String,
}

impl<'a, T> Fragment<'a, T> {
    /// Caller has checked that both windows stay within `usize`.
    pub(crate) fn new(matrix: &'a SparseMatrix<T>, options: &FragmentOptions) -> Self {
        Self {
            matrix,
            row_start: options.row_start,
            col_start: options.col_start,
            nrows: options.nrows,
            ncols: options.ncols,
            separator: options.separator.clone(),
        }
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Value at window-relative `(i, j)`, or `None` outside the window.
    pub fn get(&self, i: usize, j: usize) -> Option<&'a T> {
        if i < self.nrows && j < self.ncols {
            Some(self.matrix.get(self.row_start + i, self.col_start + j))
        } else {
            None
        }
    }

    /// Rows of the window, each as its run of logical values.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &'a T>> {
        let matrix = self.matrix;
        let cols = self.col_start..self.col_start + self.ncols;
        (self.row_start..self.row_start + self.nrows)
            .map(move |row| cols.clone().map(move |col| matrix.get(row, col)))
    }

    /// Number of stored cells inside the window.
    pub fn stored(&self) -> usize {
        let cols = self.col_start..self.col_start + self.ncols;
        (self.row_start..self.row_start + self.nrows)
            .map(|row| {
                self.matrix
                    .row(row)
                    .iter()
                    .filter(|(col, _)| cols.contains(col))
                    .count()
            })
            .sum()
    }
}

impl<T: fmt::Display> fmt::Display for Fragment<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.enumerate() {
                if j > 0 {
                    f.write_str(&self.separator)?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}
