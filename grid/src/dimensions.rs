//! Validated grid shape.
//!
//! Counts arriving from outside (signed integers, config documents) are checked
//! here once. A [`Dimensions`] value is proof that both counts are legal.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::GridError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Rows,
    Cols,
}

impl Axis {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Axis::Rows => "rows",
            Axis::Cols => "cols",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of a grid: `rows` cells per column, `cols` columns.
///
/// # Serde
///
/// Serializes as `{ "rows": .., "cols": .. }`. Deserialization accepts any
/// integer up to `usize::MAX` and fails with [`GridError::InvalidDimension`]'s
/// message for negatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "DimensionsWire")]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Validate signed counts. Nothing is allocated on failure.
    pub fn try_new(rows: i64, cols: i64) -> Result<Self, GridError> {
        Self::checked(i128::from(rows), i128::from(cols))
    }

    fn checked(rows: i128, cols: i128) -> Result<Self, GridError> {
        let rows = checked_count(Axis::Rows, rows)?;
        let cols = checked_count(Axis::Cols, cols)?;
        Ok(Self { rows, cols })
    }

    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(self) -> usize {
        self.cols
    }

    #[must_use]
    pub const fn along(self, axis: Axis) -> usize {
        match axis {
            Axis::Rows => self.rows,
            Axis::Cols => self.cols,
        }
    }

    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

fn checked_count(axis: Axis, value: i128) -> Result<usize, GridError> {
    usize::try_from(value).map_err(|_| {
        tracing::debug!(%axis, value, "Rejected grid dimension");
        GridError::InvalidDimension { axis, value }
    })
}

impl TryFrom<(i64, i64)> for Dimensions {
    type Error = GridError;

    fn try_from((rows, cols): (i64, i64)) -> Result<Self, Self::Error> {
        Self::try_new(rows, cols)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[derive(Deserialize)]
struct DimensionsWire {
    rows: i128,
    cols: i128,
}

impl TryFrom<DimensionsWire> for Dimensions {
    type Error = GridError;

    fn try_from(wire: DimensionsWire) -> Result<Self, Self::Error> {
        Self::checked(wire.rows, wire.cols)
    }
}
