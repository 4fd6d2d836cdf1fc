//! Options for rendering a rectangular fragment of a matrix.
//!
//! This module provides the `FragmentOptions` struct, which selects the window
//! passed to [`SparseMatrix::fragment`](crate::SparseMatrix::fragment): its
//! top-left corner, its extent in rows and columns, and the separator written
//! between neighbouring values when the fragment is displayed.

/// Window & rendering parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentOptions {
    /// First row of the window
    pub row_start: usize,

    /// First column of the window
    pub col_start: usize,

    /// Number of rows in the window
    pub nrows: usize,

    /// Number of columns in the window
    pub ncols: usize,

    /// Written between values on one line
    pub separator: String,
}

impl Default for FragmentOptions {
    fn default() -> Self {
        Self {
            row_start: 0,
            col_start: 0,
            nrows: 10,
            ncols: 10,
            separator: " ".to_string(),
        }
    }
}

impl FragmentOptions {
    /// Window of `nrows` × `ncols` anchored at the origin.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols, ..Self::default() }
    }

    pub fn at(mut self, row_start: usize, col_start: usize) -> Self {
        self.row_start = row_start;
        self.col_start = col_start;
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
