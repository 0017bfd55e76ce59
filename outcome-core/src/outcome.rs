//! The outcome container, its constructors and inspection

use core::fmt;

/// Either a successful value of type `T` or a failure of type `F`.
///
/// The container is immutable: every operation consumes or borrows it and
/// produces a new value. Equality, ordering and hashing are structural, and a
/// success never compares equal to a failure.
///
/// ```
/// use outcome_core::Outcome;
///
/// let ok: Outcome<i32, &str> = Outcome::success(5);
/// let err: Outcome<i32, &str> = Outcome::failure("e");
///
/// assert_eq!(ok.to_string(), "Success(5)");
/// assert_eq!(err.to_string(), "Failure(e)");
/// assert_ne!(ok, err);
/// ```
#[must_use = "this `Outcome` may be a failure, which should be handled"]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Outcome<T, F> {
    pub(crate) repr: Repr<T, F>,
}

/// Internal state. The failure arm carries its payload inside [`Failed`], so a
/// success whose value happens to be an outcome (or anything else) is never
/// read as a failure.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Repr<T, F> {
    Success(T),
    Failure(Failed<F>),
}

/// Tag for failure payloads. Never leaves the crate.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Failed<F>(pub(crate) F);

impl<T, F> Outcome<T, F> {
    /// Create an outcome holding a successful value
    #[inline]
    pub const fn success(value: T) -> Self {
        Self {
            repr: Repr::Success(value),
        }
    }

    /// Create an outcome holding a failure payload
    #[inline]
    pub const fn failure(failure: F) -> Self {
        Self {
            repr: Repr::Failure(Failed(failure)),
        }
    }

    /// Returns `true` if this outcome is a success
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.repr, Repr::Success(_))
    }

    /// Returns `true` if this outcome is a failure
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self.repr, Repr::Failure(_))
    }

    /// The successful value, or `None` for a failure
    #[inline]
    pub fn value_or_none(self) -> Option<T> {
        match self.repr {
            Repr::Success(value) => Some(value),
            Repr::Failure(_) => None,
        }
    }

    /// The failure payload, or `None` for a success
    #[inline]
    pub fn failure_or_none(self) -> Option<F> {
        match self.repr {
            Repr::Success(_) => None,
            Repr::Failure(Failed(failure)) => Some(failure),
        }
    }

    /// Borrow the payload without consuming the outcome
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &F> {
        match &self.repr {
            Repr::Success(value) => Outcome::success(value),
            Repr::Failure(Failed(failure)) => Outcome::failure(failure),
        }
    }

    /// Convert into a standard [`Result`], e.g. to use `?` on it
    #[inline]
    pub fn into_result(self) -> Result<T, F> {
        match self.repr {
            Repr::Success(value) => Ok(value),
            Repr::Failure(Failed(failure)) => Err(failure),
        }
    }
}

impl<T, F> From<Result<T, F>> for Outcome<T, F> {
    #[inline]
    fn from(result: Result<T, F>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(failure) => Self::failure(failure),
        }
    }
}

impl<T, F> From<Outcome<T, F>> for Result<T, F> {
    #[inline]
    fn from(outcome: Outcome<T, F>) -> Self {
        outcome.into_result()
    }
}

impl<T: fmt::Display, F: fmt::Display> fmt::Display for Outcome<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Success(value) => write!(f, "Success({value})"),
            Repr::Failure(failed) => fmt::Display::fmt(failed, f),
        }
    }
}

impl<F: fmt::Display> fmt::Display for Failed<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failure({})", self.0)
    }
}

impl<T: fmt::Debug, F: fmt::Debug> fmt::Debug for Outcome<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Success(value) => f.debug_tuple("Success").field(value).finish(),
            Repr::Failure(Failed(failure)) => f.debug_tuple("Failure").field(failure).finish(),
        }
    }
}
