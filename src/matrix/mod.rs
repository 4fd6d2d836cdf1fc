//! Matrix module: the sparse container, its access views, fragments and dense interop.

pub mod dense;
pub mod fragment;
pub mod sparse;
pub mod view;

pub use fragment::Fragment;
pub use sparse::{Coordinate, IntoIter, Iter, SparseMatrix};
pub use view::{Cell, CellMut, Row, RowIter, RowMut};
