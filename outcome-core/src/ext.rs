//! Constructor sugar for arbitrary values

use crate::outcome::Outcome;

/// Wrap any value as a success
pub trait IntoSuccess: Sized {
    /// Same as [`Outcome::success`]
    fn into_success<F>(self) -> Outcome<Self, F> {
        Outcome::success(self)
    }
}

impl<T> IntoSuccess for T {}

/// Wrap any value as a failure payload
pub trait IntoFailure: Sized {
    /// Same as [`Outcome::failure`]
    fn into_failure<T>(self) -> Outcome<T, Self> {
        Outcome::failure(self)
    }
}

impl<F> IntoFailure for F {}
