//! Dense interop on top of Faer.
//!
//! Storage always stays sparse. This module only moves data across the
//! boundary: a sparse matrix can be filled from column-major data or from any
//! shaped [`MatrixGet`] source such as `faer::Mat<T>`, and a finite window of
//! it can be exported as a `faer::Mat<T>`.

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::{Axis, MatrixError, window_end};
use crate::matrix::sparse::SparseMatrix;
use faer::Mat;
use tracing::debug;

impl<T: Clone> MatrixGet<T> for Mat<T> {
    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)].clone()
    }
}

impl<T> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

impl<T: PartialEq> SparseMatrix<T> {
    /// Construct from raw column-major storage, skipping cells equal to `default`.
    pub fn from_raw(
        nrows: usize,
        ncols: usize,
        data: Vec<T>,
        default: T,
    ) -> Result<Self, MatrixError> {
        match nrows.checked_mul(ncols) {
            Some(expected) if expected == data.len() => {}
            expected => {
                return Err(MatrixError::ShapeMismatch {
                    expected: expected.unwrap_or(usize::MAX),
                    found: data.len(),
                });
            }
        }
        let mut m = Self::new(default);
        for (k, value) in data.into_iter().enumerate() {
            m.set(k % nrows, k / nrows, value);
        }
        debug!(nrows, ncols, stored = m.len(), "imported column-major data");
        Ok(m)
    }

    /// Copy every non-default cell of a finite source.
    pub fn from_source<M>(source: &M, default: T) -> Self
    where
        M: MatrixGet<T> + MatShape + ?Sized,
    {
        let (nrows, ncols) = (source.nrows(), source.ncols());
        let mut m = Self::new(default);
        for j in 0..ncols {
            for i in 0..nrows {
                m.set(i, j, source.get(i, j));
            }
        }
        debug!(nrows, ncols, stored = m.len(), "imported matrix source");
        m
    }
}

impl<T: Clone> SparseMatrix<T> {
    /// Export the `nrows × ncols` window anchored at `(row_start, col_start)`.
    pub fn to_dense(
        &self,
        row_start: usize,
        col_start: usize,
        nrows: usize,
        ncols: usize,
    ) -> Result<Mat<T>, MatrixError> {
        window_end(Axis::Row, row_start, nrows)?;
        window_end(Axis::Col, col_start, ncols)?;
        debug!(row_start, col_start, nrows, ncols, "exporting dense window");
        Ok(Mat::from_fn(nrows, ncols, |i, j| {
            self.get(row_start + i, col_start + j).clone()
        }))
    }
}
