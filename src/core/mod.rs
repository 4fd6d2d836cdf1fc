//! Core traits shared by the sparse container and its dense interop.

pub mod traits;
pub use traits::{MatShape, MatrixGet, MatrixSet};
