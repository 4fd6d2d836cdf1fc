//! Sparse, logically infinite matrix.
//!
//! [`SparseMatrix`] models an unbounded grid addressed by `(row, col)` pairs of
//! `usize`. Every cell reads as the default value supplied at construction until
//! it is assigned something else; only those non-default cells are stored.
//!
//! # Compaction
//! Assigning a value equal (by `PartialEq`) to the default removes the cell's
//! entry instead of storing it, so [`SparseMatrix::len`] always counts exactly the
//! cells whose value differs from the default. Equality is exact: for floating
//! point `-0.0` compacts against a `0.0` default, a tiny residue such as `1e-17`
//! does not, and `NaN` never does.
//!
//! # Iteration
//! [`SparseMatrix::iter`] walks the stored entries in ascending `(row, col)`
//! order. Each call starts a fresh pass. The iterator borrows the matrix, so the
//! matrix cannot be mutated while a pass is in progress.
//!
//! # Threading
//! The container performs no synchronization. Shared borrows may be read from
//! several threads when `T: Sync`; mutation always needs the exclusive `&mut`
//! borrow and must be serialized by the caller.

use std::collections::{BTreeMap, btree_map};
use std::iter::FusedIterator;
use std::ops::Index;

use num_traits::Zero;
use tracing::{debug, trace};

use crate::config::options::FragmentOptions;
use crate::core::traits::{MatrixGet, MatrixSet};
use crate::error::{Axis, MatrixError, window_end};
use crate::matrix::fragment::Fragment;
use crate::matrix::view::{Cell, CellMut, Row, RowMut};

/// `(row, col)` key of a stored cell. Ordered lexicographically.
pub type Coordinate = (usize, usize);

/// Infinite two-dimensional matrix storing only cells that differ from a default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparseMatrix<T> {
    default: T,
    /// Non-default cells only.
    entries: BTreeMap<Coordinate, T>,
}

impl<T> SparseMatrix<T> {
    /// Creates an empty matrix whose every cell reads as `default`.
    pub fn new(default: T) -> Self {
        Self {
            default,
            entries: BTreeMap::new(),
        }
    }

    /// Value reported for every cell without an entry.
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Number of stored (non-default) cells.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Logical value at `(row, col)`. Never creates an entry.
    pub fn get(&self, row: usize, col: usize) -> &T {
        self.entries.get(&(row, col)).unwrap_or(&self.default)
    }

    /// Whether `(row, col)` holds a stored, non-default value.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&(row, col))
    }

    /// Resets `(row, col)` to the default, returning the value it held.
    pub fn remove(&mut self, row: usize, col: usize) -> Option<T> {
        let old = self.entries.remove(&(row, col));
        if old.is_some() {
            trace!(row, col, "cell reset to default");
        }
        old
    }

    /// Resets every cell to the default.
    pub fn clear(&mut self) {
        debug!(entries = self.entries.len(), "clearing sparse matrix");
        self.entries.clear();
    }

    /// Keeps only the stored cells for which `f` returns `true`; the rest read
    /// as the default afterwards.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(Coordinate, &T) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|&coord, value| f(coord, &*value));
        debug!(before, after = self.entries.len(), "retained sparse entries");
    }

    /// Ascending `(row, col)` pass over the stored cells.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Read-only view of one row.
    pub fn row(&self, row: usize) -> Row<'_, T> {
        Row::new(self, row)
    }

    /// Read-only handle to one cell.
    pub fn cell(&self, row: usize, col: usize) -> Cell<'_, T> {
        Cell::new(self, row, col)
    }

    /// Textual/read-only window over a rectangle of cells.
    pub fn fragment(&self, options: &FragmentOptions) -> Result<Fragment<'_, T>, MatrixError> {
        window_end(Axis::Row, options.row_start, options.nrows)?;
        window_end(Axis::Col, options.col_start, options.ncols)?;
        Ok(Fragment::new(self, options))
    }

    /// Stored cells of `row`, ascending by column.
    pub(crate) fn row_range(&self, row: usize) -> btree_map::Range<'_, Coordinate, T> {
        self.entries.range((row, 0)..=(row, usize::MAX))
    }
}

impl<T: PartialEq> SparseMatrix<T> {
    /// Assigns `value` at `(row, col)`.
    ///
    /// Writing the default removes any entry at that coordinate; any other value
    /// inserts or overwrites it.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let key = (row, col);
        if value == self.default {
            if self.entries.remove(&key).is_some() {
                trace!(row, col, "cell compacted back to default");
            }
        } else if self.entries.insert(key, value).is_some() {
            trace!(row, col, "cell overwritten");
        } else {
            trace!(row, col, "cell materialized");
        }
    }

    /// Assigns `f(current)` at `(row, col)`, where `current` is the logical value.
    pub fn update<F>(&mut self, row: usize, col: usize, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(self.get(row, col));
        self.set(row, col, next);
    }

    /// Writable view of one row.
    pub fn row_mut(&mut self, row: usize) -> RowMut<'_, T> {
        RowMut::new(self, row)
    }

    /// Writable handle to one cell.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> CellMut<'_, T> {
        CellMut::new(self, row, col)
    }
}

impl<T: Zero> SparseMatrix<T> {
    /// Matrix whose default value is zero.
    pub fn zeros() -> Self {
        Self::new(T::zero())
    }
}

impl<T: Default> Default for SparseMatrix<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Index<Coordinate> for SparseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): Coordinate) -> &T {
        self.get(row, col)
    }
}

impl<T: Clone> MatrixGet<T> for SparseMatrix<T> {
    fn get(&self, i: usize, j: usize) -> T {
        SparseMatrix::get(self, i, j).clone()
    }
}

impl<T: PartialEq> MatrixSet<T> for SparseMatrix<T> {
    fn set(&mut self, i: usize, j: usize, value: T) {
        SparseMatrix::set(self, i, j, value);
    }
}

impl<T: PartialEq> Extend<(Coordinate, T)> for SparseMatrix<T> {
    fn extend<I: IntoIterator<Item = (Coordinate, T)>>(&mut self, iter: I) {
        for ((row, col), value) in iter {
            self.set(row, col, value);
        }
    }
}

impl<'a, T> IntoIterator for &'a SparseMatrix<T> {
    type Item = (Coordinate, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for SparseMatrix<T> {
    type Item = (Coordinate, T);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

#[cfg(feature = "rayon")]
impl<T: Sync> SparseMatrix<T> {
    /// Parallel read-only pass over the stored cells.
    pub fn par_iter(&self) -> impl rayon::iter::ParallelIterator<Item = (Coordinate, &T)> {
        use rayon::prelude::*;
        self.entries.par_iter().map(|(&coord, value)| (coord, value))
    }
}

/// Borrowing iterator over stored cells, see [`SparseMatrix::iter`].
pub struct Iter<'a, T> {
    inner: btree_map::Iter<'a, Coordinate, T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Coordinate, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&coord, value)| (coord, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(&coord, value)| (coord, value))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over stored cells, ascending by coordinate.
pub struct IntoIter<T> {
    inner: btree_map::IntoIter<Coordinate, T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = (Coordinate, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
