use thiserror::Error;

// Unified error type for infimat

/// Axis of a rectangular window, reported by [`MatrixError::CoordinateOverflow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Col => f.write_str("column"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("shape mismatch: expected {expected} values, found {found}")]
    ShapeMismatch { expected: usize, found: usize },
    #[error("{axis} window starting at {start} with length {len} overflows usize")]
    CoordinateOverflow { axis: Axis, start: usize, len: usize },
}

/// Checks that `start + len` is addressable, returning the exclusive end.
pub(crate) fn window_end(axis: Axis, start: usize, len: usize) -> Result<usize, MatrixError> {
    start
        .checked_add(len)
        .ok_or(MatrixError::CoordinateOverflow { axis, start, len })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_end_reports_overflowing_axis() {
        assert_eq!(window_end(Axis::Row, 3, 4), Ok(7));
        let err = window_end(Axis::Col, usize::MAX, 2).unwrap_err();
        assert_eq!(
            err,
            MatrixError::CoordinateOverflow { axis: Axis::Col, start: usize::MAX, len: 2 }
        );
        assert!(err.to_string().starts_with("column window"));
    }
}
