//! Fixed-size two-dimensional grids.
//!
//! A [`Grid`] is a rectangular `rows × cols` container stored column-major:
//! `cols` columns of exactly `rows` cells each. Its shape is a validated
//! [`Dimensions`] and never changes after construction.
//!
//! - **`grid`**: construction, access, iteration, and the `drop_*` reshaping helpers
//! - **`dimensions`**: shape validation at the boundary (negative counts are rejected)
//! - **`combine`**: cartesian iteration over two sequences

mod combine;
mod dimensions;
mod error;
mod grid;

pub use combine::{Combined, combine};
pub use dimensions::{Axis, Dimensions};
pub use error::GridError;
pub use grid::{Grid, create_grid};
