//! Success-or-failure sum type.

use std::any::Any;
use std::fmt;
use std::panic::{self, UnwindSafe};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Either, WrongVariant};

/// The result of an operation: a value of type `T` or a failure of type `F`.
///
/// Unlike [`std::result::Result`], `Outcome` treats the failure as ordinary data that
/// callers carry around, map, and convert into an [`Either`].
///
/// # Serde
///
/// Externally tagged: `{"Value": ...}` or `{"Failure": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<T, F> {
    Value(T),
    Failure(F),
}

/// Failure payload of [`Outcome::catching`]: the operation panicked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("operation panicked: {message}")]
pub struct CaughtPanic {
    message: String,
}

impl CaughtPanic {
    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        Self { message }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<T, F> Outcome<T, F> {
    pub fn of_value(value: T) -> Self {
        Self::Value(value)
    }

    pub fn of_failure(failure: F) -> Self {
        Self::Failure(failure)
    }

    /// Run `operation` and capture its error as the failure.
    ///
    /// The capture boundary is `F`: any error convertible into `F` is captured.
    /// Panics are not captured and unwind through this call; use
    /// [`Outcome::catching`] for those.
    ///
    /// ```
    /// use std::num::ParseIntError;
    /// use tessera_types::Outcome;
    ///
    /// let parsed: Outcome<i32, ParseIntError> = Outcome::of(|| "42".parse());
    /// assert_eq!(parsed, Outcome::Value(42));
    ///
    /// let failed: Outcome<i32, String> = Outcome::of(|| Err("Boo"));
    /// assert_eq!(failed, Outcome::Failure("Boo".to_string()));
    /// ```
    pub fn of<E, Op>(operation: Op) -> Self
    where
        Op: FnOnce() -> Result<T, E>,
        E: Into<F>,
    {
        match operation() {
            Ok(value) => Self::Value(value),
            Err(err) => Self::Failure(err.into()),
        }
    }

    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    #[must_use]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    pub fn failure(self) -> Option<F> {
        match self {
            Self::Value(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    pub fn try_value(self) -> Result<T, WrongVariant> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Failure(_) => Err(WrongVariant::new("Value", "Failure")),
        }
    }

    pub fn try_failure(self) -> Result<F, WrongVariant> {
        match self {
            Self::Value(_) => Err(WrongVariant::new("Failure", "Value")),
            Self::Failure(failure) => Ok(failure),
        }
    }

    #[must_use]
    pub fn as_ref(&self) -> Outcome<&T, &F> {
        match self {
            Self::Value(value) => Outcome::Value(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Transform the value. A failure passes through and `f` is not called.
    pub fn map<U, M>(self, f: M) -> Outcome<U, F>
    where
        M: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => Outcome::Value(f(value)),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Transform the failure. A value passes through and `f` is not called.
    pub fn map_failure<G, M>(self, f: M) -> Outcome<T, G>
    where
        M: FnOnce(F) -> G,
    {
        match self {
            Self::Value(value) => Outcome::Value(value),
            Self::Failure(failure) => Outcome::Failure(f(failure)),
        }
    }

    pub fn and_then<U, M>(self, f: M) -> Outcome<U, F>
    where
        M: FnOnce(T) -> Outcome<U, F>,
    {
        match self {
            Self::Value(value) => f(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// The value, or a fallback computed from the failure.
    pub fn value_or_else<M>(self, f: M) -> T
    where
        M: FnOnce(F) -> T,
    {
        match self {
            Self::Value(value) => value,
            Self::Failure(failure) => f(failure),
        }
    }

    /// Failure becomes `Left`, value becomes `Right`. Total and lossless.
    #[must_use]
    pub fn into_either(self) -> Either<F, T> {
        match self {
            Self::Value(value) => Either::Right(value),
            Self::Failure(failure) => Either::Left(failure),
        }
    }

    pub fn into_result(self) -> Result<T, F> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }
}

impl<T> Outcome<T, CaughtPanic> {
    /// Run `operation`, capturing an unwinding panic as the failure.
    ///
    /// The panic hook still runs, so the panic message is reported as usual.
    /// Under `panic = "abort"` nothing can be captured and the process ends.
    pub fn catching<Op>(operation: Op) -> Self
    where
        Op: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(operation) {
            Ok(value) => Self::Value(value),
            Err(payload) => {
                let caught = CaughtPanic::from_payload(&*payload);
                tracing::debug!(panic_message = %caught.message, "Captured panic as failure");
                Self::Failure(caught)
            }
        }
    }
}

impl<T, F> From<Outcome<T, F>> for Either<F, T> {
    fn from(outcome: Outcome<T, F>) -> Self {
        outcome.into_either()
    }
}

impl<T, F> From<Either<F, T>> for Outcome<T, F> {
    fn from(either: Either<F, T>) -> Self {
        either.into_outcome()
    }
}

impl<T, F> From<Result<T, F>> for Outcome<T, F> {
    fn from(result: Result<T, F>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(failure) => Self::Failure(failure),
        }
    }
}

impl<T, F> From<Outcome<T, F>> for Result<T, F> {
    fn from(outcome: Outcome<T, F>) -> Self {
        outcome.into_result()
    }
}

impl<T: fmt::Display, F: fmt::Display> fmt::Display for Outcome<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "Value({value})"),
            Self::Failure(failure) => write!(f, "Failure({failure})"),
        }
    }
}
