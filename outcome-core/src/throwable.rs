//! Boundary between unwinding panics and outcomes
//!
//! [`attempt`] is the way in: it runs a block and turns any unwinding panic
//! into a failure holding a [`Throwable`]. [`Outcome::get_or_throw`] is the
//! way out: it resumes the captured panic with its original payload.
//!
//! Only unwinding panics can be captured. Aborts (a `panic = "abort"`
//! profile, a panic while panicking, allocation failure,
//! `std::process::abort`) end the process as usual.

use crate::error::Throwable;
use crate::outcome::{Failed, Outcome, Repr};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

#[cfg(feature = "logging")]
use tracing::debug;

/// Run `block`, capturing a panic as a failure
///
/// The block is treated as unwind safe. Anything it mutated through captured
/// references may be left half-updated when it panics.
///
/// Capturing does not bypass the process panic hook: it still runs for every
/// panic before the unwind reaches this boundary, so the default hook prints
/// the message and location to stderr. Install a quieter hook with
/// [`std::panic::set_hook`] where that output is unwanted.
///
/// ```
/// use outcome_core::{attempt, raise};
///
/// let ok = attempt(|| "OK");
/// assert_eq!(ok.value_or_none(), Some("OK"));
///
/// let failed = attempt(|| -> &'static str { raise("F") });
/// assert_eq!(failed.failure_or_none().unwrap().message(), "F");
/// ```
pub fn attempt<R, B>(block: B) -> Outcome<R, Throwable>
where
    B: FnOnce() -> R,
{
    match panic::catch_unwind(AssertUnwindSafe(block)) {
        Ok(value) => Outcome::success(value),
        Err(payload) => {
            let throwable = Throwable::from_panic(payload);

            #[cfg(feature = "logging")]
            debug!("Captured panic: {}", throwable);

            Outcome::failure(throwable)
        }
    }
}

/// Run `block` with `receiver`, capturing a panic as a failure
pub fn attempt_with<T, R, B>(receiver: T, block: B) -> Outcome<R, Throwable>
where
    B: FnOnce(T) -> R,
{
    attempt(move || block(receiver))
}

/// Panic with `error` as the payload, wrapped in a [`Throwable`]
///
/// A surrounding [`attempt`] recovers `error` through
/// [`Throwable::downcast_ref`]. The panic location reported to the panic
/// hook is the caller's.
#[track_caller]
pub fn raise<E>(error: E) -> !
where
    E: fmt::Display + Send + 'static,
{
    panic::panic_any(Throwable::new(error))
}

impl<T> Outcome<T, Throwable> {
    /// The successful value; on failure, resume the captured panic
    ///
    /// The stored [`Throwable`] itself becomes the panic payload, so an
    /// enclosing [`attempt`] captures the very same failure again.
    pub fn get_or_throw(self) -> T {
        match self.repr {
            Repr::Success(value) => value,
            Repr::Failure(Failed(throwable)) => {
                #[cfg(feature = "logging")]
                debug!("Re-raising captured panic: {}", throwable);

                panic::resume_unwind(Box::new(throwable))
            }
        }
    }

    /// Like [`map`](Outcome::map), but a panic in `transform` becomes the new
    /// failure
    pub fn map_catching<R, M>(self, transform: M) -> Outcome<R, Throwable>
    where
        M: FnOnce(T) -> R,
    {
        match self.repr {
            Repr::Success(value) => attempt(move || transform(value)),
            Repr::Failure(failed) => Outcome {
                repr: Repr::Failure(failed),
            },
        }
    }

    /// Like [`recover`](Outcome::recover), but a panic in `transform` becomes
    /// the new failure
    pub fn recover_catching<R, M>(self, transform: M) -> Outcome<R, Throwable>
    where
        M: FnOnce(Throwable) -> R,
        T: Into<R>,
    {
        match self.repr {
            Repr::Success(value) => Outcome::success(value.into()),
            Repr::Failure(Failed(throwable)) => attempt(move || transform(throwable)),
        }
    }
}
