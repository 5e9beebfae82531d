//! Two-way sum type with no privileged side.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Outcome, WrongVariant};

/// A value of either `L` or `R`.
///
/// Neither side means success. Only the conversions to [`Option`] and [`Outcome`]
/// read `Right` as the present side.
///
/// Payloads are read by matching, so asking for a side that is not there does not compile:
///
/// ```compile_fail
/// use tessera_types::Either;
///
/// let either: Either<&str, i32> = Either::of_right(1);
/// let text = match either {
///     Either::Left(text) => text,
/// };
/// ```
///
/// # Serde
///
/// Externally tagged: `{"Left": ...}` or `{"Right": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn of_left(value: L) -> Self {
        Self::Left(value)
    }

    pub fn of_right(value: R) -> Self {
        Self::Right(value)
    }

    #[must_use]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    #[must_use]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    #[must_use]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    #[must_use]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    pub fn try_left(self) -> Result<L, WrongVariant> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(WrongVariant::new("Left", "Right")),
        }
    }

    pub fn try_right(self) -> Result<R, WrongVariant> {
        match self {
            Self::Left(_) => Err(WrongVariant::new("Right", "Left")),
            Self::Right(value) => Ok(value),
        }
    }

    #[must_use]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transform the left payload. `f` is not called for `Right`.
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Self::Left(value) => Either::Left(f(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transform the right payload. `f` is not called for `Left`.
    pub fn map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(f(value)),
        }
    }

    pub fn flat_map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        match self {
            Self::Left(value) => f(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    pub fn flat_map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => f(value),
        }
    }

    /// Collapse both sides into one type. Exactly one of the functions runs.
    pub fn fold<T, FL, FR>(self, left_fn: FL, right_fn: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_fn(value),
            Self::Right(value) => right_fn(value),
        }
    }

    #[must_use]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Right-biased: a `Left` payload is discarded.
    #[must_use]
    pub fn into_option(self) -> Option<R> {
        self.right()
    }

    /// `Left` becomes the failure, `Right` the value. Inverse of [`Outcome::into_either`].
    #[must_use]
    pub fn into_outcome(self) -> Outcome<R, L> {
        match self {
            Self::Left(failure) => Outcome::Failure(failure),
            Self::Right(value) => Outcome::Value(value),
        }
    }
}

impl<T> From<Option<T>> for Either<(), T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Right(value),
            None => Self::Left(()),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(f, "Left({value})"),
            Self::Right(value) => write!(f, "Right({value})"),
        }
    }
}
