use thiserror::Error;

use crate::Axis;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid {axis} count: {value}")]
    InvalidDimension { axis: Axis, value: i128 },
    #[error("grid source must contain at least one row or column")]
    Empty,
    #[error("sequence {index} has {actual} cells, expected {expected}")]
    Ragged {
        index: usize,
        expected: usize,
        actual: usize,
    },
    #[error("grid shape needs {expected} entries, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("cannot drop {requested} {axis} from a grid with {available}")]
    DropOutOfRange {
        axis: Axis,
        requested: usize,
        available: usize,
    },
}
