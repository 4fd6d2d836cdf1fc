//! Core cell-access traits for infimat.

/// Read a single cell by value.
pub trait MatrixGet<T> {
    /// Logical value at `(i, j)`.
    fn get(&self, i: usize, j: usize) -> T;
}

/// Write a single cell.
pub trait MatrixSet<T> {
    /// Assign `value` at `(i, j)`.
    fn set(&mut self, i: usize, j: usize, value: T);
}

/// Finite shape of a matrix-like source.
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
}
