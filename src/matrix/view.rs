//! Row and cell views for two-step indexing.
//!
//! `matrix.row_mut(r).cell(c)` resolves to the same cell as `(r, c)` without
//! copying any storage: a view is just a borrow of the matrix plus the fixed
//! indices. Views are meant to live for a single expression; the borrow checker
//! keeps them from outliving the matrix or overlapping a mutation.

use std::collections::btree_map;
use std::iter::FusedIterator;

use crate::matrix::sparse::{Coordinate, SparseMatrix};

/// Read-only view of one row.
pub struct Row<'a, T> {
    matrix: &'a SparseMatrix<T>,
    row: usize,
}

impl<T> Clone for Row<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Row<'_, T> {}

impl<'a, T> Row<'a, T> {
    pub(crate) fn new(matrix: &'a SparseMatrix<T>, row: usize) -> Self {
        Self { matrix, row }
    }

    /// Row index this view is bound to.
    pub fn index(&self) -> usize {
        self.row
    }

    pub fn cell(&self, col: usize) -> Cell<'a, T> {
        Cell::new(self.matrix, self.row, col)
    }

    pub fn get(&self, col: usize) -> &'a T {
        self.matrix.get(self.row, col)
    }

    /// Stored cells of this row as `(col, value)`, ascending by column.
    pub fn iter(&self) -> RowIter<'a, T> {
        RowIter {
            inner: self.matrix.row_range(self.row),
        }
    }

    /// Number of stored cells in this row.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Writable view of one row.
pub struct RowMut<'a, T> {
    matrix: &'a mut SparseMatrix<T>,
    row: usize,
}

impl<'a, T: PartialEq> RowMut<'a, T> {
    pub(crate) fn new(matrix: &'a mut SparseMatrix<T>, row: usize) -> Self {
        Self { matrix, row }
    }

    pub fn index(&self) -> usize {
        self.row
    }

    /// Cell handle reborrowing this row view.
    pub fn cell(&mut self, col: usize) -> CellMut<'_, T> {
        CellMut::new(self.matrix, self.row, col)
    }

    /// Cell handle consuming this row view.
    pub fn into_cell(self, col: usize) -> CellMut<'a, T> {
        CellMut::new(self.matrix, self.row, col)
    }

    pub fn get(&self, col: usize) -> &T {
        self.matrix.get(self.row, col)
    }

    pub fn set(&mut self, col: usize, value: T) {
        self.matrix.set(self.row, col, value);
    }

    pub fn iter(&self) -> RowIter<'_, T> {
        RowIter {
            inner: self.matrix.row_range(self.row),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Read-only handle to one cell.
pub struct Cell<'a, T> {
    matrix: &'a SparseMatrix<T>,
    row: usize,
    col: usize,
}

impl<T> Clone for Cell<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cell<'_, T> {}

impl<'a, T> Cell<'a, T> {
    pub(crate) fn new(matrix: &'a SparseMatrix<T>, row: usize, col: usize) -> Self {
        Self { matrix, row, col }
    }

    pub fn coordinate(&self) -> Coordinate {
        (self.row, self.col)
    }

    /// Logical value of the cell.
    pub fn read(&self) -> &'a T {
        self.matrix.get(self.row, self.col)
    }

    /// `true` when the cell has no stored entry.
    pub fn is_default(&self) -> bool {
        !self.matrix.contains(self.row, self.col)
    }
}

/// Writable handle to one cell.
///
/// Every [`write`](CellMut::write) goes through [`SparseMatrix::set`] and returns
/// the handle, so writes can be chained; the last one wins:
///
/// ```
/// use infimat::SparseMatrix;
///
/// let mut m = SparseMatrix::new(0);
/// m.cell_mut(100, 100).write(314).write(0).write(217);
/// assert_eq!(*m.get(100, 100), 217);
/// assert_eq!(m.len(), 1);
/// ```
pub struct CellMut<'a, T> {
    matrix: &'a mut SparseMatrix<T>,
    row: usize,
    col: usize,
}

impl<'a, T: PartialEq> CellMut<'a, T> {
    pub(crate) fn new(matrix: &'a mut SparseMatrix<T>, row: usize, col: usize) -> Self {
        Self { matrix, row, col }
    }

    pub fn coordinate(&self) -> Coordinate {
        (self.row, self.col)
    }

    pub fn read(&self) -> &T {
        self.matrix.get(self.row, self.col)
    }

    pub fn write(&mut self, value: T) -> &mut Self {
        self.matrix.set(self.row, self.col, value);
        self
    }

    pub fn update<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&T) -> T,
    {
        self.matrix.update(self.row, self.col, f);
        self
    }

    /// Resets the cell to the default, returning the stored value if any.
    pub fn reset(&mut self) -> Option<T> {
        self.matrix.remove(self.row, self.col)
    }

    pub fn is_default(&self) -> bool {
        !self.matrix.contains(self.row, self.col)
    }
}

/// Stored cells of one row as `(col, value)`.
pub struct RowIter<'a, T> {
    inner: btree_map::Range<'a, Coordinate, T>,
}

impl<'a, T> Iterator for RowIter<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&(_, col), value)| (col, value))
    }
}

impl<T> DoubleEndedIterator for RowIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(&(_, col), value)| (col, value))
    }
}

impl<T> FusedIterator for RowIter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_step_write_reaches_matrix() {
        let mut m = SparseMatrix::new(-1);
        m.row_mut(1).cell(1).write(42);
        assert_eq!(*m.get(1, 1), 42);
        assert_eq!(*m.row(1).cell(1).read(), 42);
        assert_eq!(*m.row(0).get(0), -1);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn chained_writes_reevaluate_compaction() {
        let mut m = SparseMatrix::new(0);
        m.row_mut(100).cell(100).write(314).write(0).write(217);
        assert_eq!(*m.get(100, 100), 217);
        assert_eq!(m.len(), 1);

        m.cell_mut(5, 5).write(1).write(0);
        assert!(!m.contains(5, 5));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn row_iter_is_scoped_to_one_row() {
        let mut m = SparseMatrix::new(0);
        m.set(0, 9, 1);
        m.set(1, 4, 2);
        m.set(1, 0, 3);
        m.set(1, usize::MAX, 4);
        m.set(2, 0, 5);
        let row: Vec<_> = m.row(1).iter().collect();
        assert_eq!(row, vec![(0, &3), (4, &2), (usize::MAX, &4)]);
        assert_eq!(m.row(1).len(), 3);
        assert!(m.row(7).is_empty());
        assert_eq!(m.row(1).iter().next_back(), Some((usize::MAX, &4)));
    }

    #[test]
    fn row_mut_set_and_into_cell() {
        let mut m = SparseMatrix::new('.');
        {
            let mut row = m.row_mut(3);
            row.set(0, 'a');
            row.set(1, 'b');
            row.set(0, '.');
            assert_eq!(row.len(), 1);
            assert_eq!(*row.get(1), 'b');
            assert_eq!(row.index(), 3);
        }
        let mut cell = m.row_mut(3).into_cell(1);
        assert_eq!(cell.coordinate(), (3, 1));
        assert_eq!(cell.reset(), Some('b'));
        assert!(cell.is_default());
        assert!(m.is_empty());
    }

    #[test]
    fn cell_update_and_views_are_copy() {
        let mut m = SparseMatrix::new(1u32);
        m.cell_mut(0, 0).update(|v| v * 10).update(|v| v + 1);
        assert_eq!(*m.get(0, 0), 11);

        let row = m.row(0);
        let again = row;
        let cell = row.cell(0);
        assert_eq!(cell.coordinate(), (0, 0));
        assert!(!cell.is_default());
        assert_eq!(*again.cell(3).read(), 1);
        assert!(again.cell(3).is_default());
    }
}
