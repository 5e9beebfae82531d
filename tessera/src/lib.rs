//! Tessera: fixed-size grids and `Outcome`/`Either` sum types.
//!
//! This crate re-exports the two leaf crates so callers need a single dependency:
//!
//! - [`tessera_grid`]: [`Grid`], [`Dimensions`], [`combine`]
//! - [`tessera_types`]: [`Outcome`], [`Either`]
//!
//! ```
//! use tessera::{Either, Outcome};
//!
//! let greeting: Outcome<&str, String> = Outcome::of_value("Hello, world!");
//! let first = greeting.map(|s| s.chars().next().unwrap_or_default()).into_either();
//! assert_eq!(first, Either::of_right('H'));
//! ```

pub use tessera_grid::{Axis, Combined, Dimensions, Grid, GridError, combine, create_grid};
pub use tessera_types::{CaughtPanic, Either, Outcome, WrongVariant};
