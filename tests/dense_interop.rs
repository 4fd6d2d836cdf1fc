//! Tests for moving data between the sparse matrix and `faer` dense matrices.
//!
//! Dense matrices are only an import/export format here: the tests check that
//! default cells are skipped on import, that exported windows carry the logical
//! values, and that floating-point compaction uses exact equality.

use approx::assert_abs_diff_eq;
use faer::Mat;
use infimat::{MatrixError, SparseMatrix};

/// Constructs an identity matrix of size `n`.
fn make_eye(n: usize) -> Mat<f64> {
    let mut mat = Mat::<f64>::zeros(n, n);
    for i in 0..n {
        mat[(i, i)] = 1.0;
    }
    mat
}

/// Importing an identity stores only the diagonal.
#[test]
fn import_identity() {
    let eye = make_eye(6);
    let m = SparseMatrix::from_source(&eye, 0.0);
    assert_eq!(m.len(), 6);
    assert!(m.iter().all(|((r, c), &v)| r == c && v == 1.0));
}

/// An exported window contains stored values and defaults elsewhere.
#[test]
fn export_window() {
    let mut m = SparseMatrix::new(0.5);
    m.set(1_000_000, 3, 0.25);
    m.set(1_000_001, 4, 0.1 + 0.2);
    let dense = m.to_dense(1_000_000, 3, 2, 2).unwrap();
    assert_abs_diff_eq!(dense[(0, 0)], 0.25, epsilon = 1e-15);
    assert_abs_diff_eq!(dense[(0, 1)], 0.5, epsilon = 1e-15);
    assert_abs_diff_eq!(dense[(1, 1)], 0.3, epsilon = 1e-12);
}

/// Compaction is exact: near-zero residues stay stored, signed zero compacts.
#[test]
fn float_compaction_is_exact() {
    let mut m = SparseMatrix::new(0.0_f64);
    let residue = 0.1 + 0.2 - 0.3;
    m.set(0, 0, residue);
    assert_eq!(m.len(), 1);
    assert_abs_diff_eq!(*m.get(0, 0), 0.0, epsilon = 1e-15);

    m.set(0, 0, -0.0);
    assert!(m.is_empty());

    m.set(1, 1, f64::NAN);
    m.set(1, 1, f64::NAN);
    assert_eq!(m.len(), 1);
}

/// A NaN default never matches itself, so every write is stored.
#[test]
fn nan_default_stores_everything() {
    let mut m = SparseMatrix::new(f64::NAN);
    m.set(0, 0, f64::NAN);
    assert_eq!(m.len(), 1);
    assert!(m.get(5, 5).is_nan());
}

/// Raw column-major import validates its length.
#[test]
fn raw_import_shape() {
    let m = SparseMatrix::from_raw(2, 3, vec![0.0, 1.0, 2.0, 0.0, 0.0, 3.0], 0.0).unwrap();
    let cells: Vec<_> = m.iter().map(|(coord, &v)| (coord, v)).collect();
    assert_eq!(cells, vec![((0, 1), 2.0), ((1, 0), 1.0), ((1, 2), 3.0)]);

    let err = SparseMatrix::from_raw(2, 3, vec![0.0; 5], 0.0).unwrap_err();
    assert!(matches!(err, MatrixError::ShapeMismatch { expected: 6, found: 5 }));
}
