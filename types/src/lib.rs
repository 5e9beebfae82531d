//! Sum types for Tessera.
//!
//! This crate contains pure value types with no IO, no async, and minimal dependencies:
//!
//! - **[`Outcome`]**: a value or a failure, with conversions to and from [`std::result::Result`]
//! - **[`Either`]**: one of two values, with no privileged side
//!
//! Payloads are reached by matching on the public variants. Accessors that can
//! observe the wrong variant return `Option` or [`WrongVariant`] instead of panicking.

mod either;
mod outcome;

pub use either::Either;
pub use outcome::{CaughtPanic, Outcome};

use thiserror::Error;

/// A payload was requested from the variant that is not populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected the {expected} variant, found {found}")]
pub struct WrongVariant {
    pub expected: &'static str,
    pub found: &'static str,
}

impl WrongVariant {
    pub(crate) const fn new(expected: &'static str, found: &'static str) -> Self {
        Self { expected, found }
    }
}
