//! Configuration for matrix views.

pub mod options;
pub use options::FragmentOptions;
