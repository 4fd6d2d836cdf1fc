//! infimat: a sparse, logically infinite two-dimensional matrix.
//!
//! Every cell of a [`SparseMatrix`] reads as a default value chosen at
//! construction. Only cells assigned something else are stored, and assigning
//! the default back removes the stored entry again.
//!
//! ```
//! use infimat::SparseMatrix;
//!
//! let mut m = SparseMatrix::new(-1);
//! assert_eq!(*m.get(10, 10), -1);
//!
//! m.row_mut(1).cell(1).write(42);
//! assert_eq!(m[(1, 1)], 42);
//! assert_eq!(m.len(), 1);
//!
//! m.set(1, 1, -1);
//! assert!(m.is_empty());
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;

// Re-exports for convenience
pub use config::*;
pub use crate::core::*;
pub use error::*;
pub use matrix::*;
