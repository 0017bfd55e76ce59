//! Error type for panics captured at the unwinding boundary

use std::any::Any;
use std::fmt;

/// Message used when a panic payload is neither a string nor a [`Throwable`]
pub const UNKNOWN_PANIC_MESSAGE: &str = "unknown panic payload";

/// A panic captured by [`attempt`](crate::attempt) and friends
///
/// Keeps the original panic payload so it can be inspected with
/// [`downcast_ref`](Throwable::downcast_ref) or re-raised unchanged by
/// [`get_or_throw`](crate::Outcome::get_or_throw). The message is extracted
/// once, at capture time.
#[derive(thiserror::Error)]
#[error("{message}")]
pub struct Throwable {
    message: String,
    payload: Box<dyn Any + Send>,
}

impl Throwable {
    /// Wrap an error value, using its `Display` output as the message
    pub fn new<E>(error: E) -> Self
    where
        E: fmt::Display + Send + 'static,
    {
        Self {
            message: error.to_string(),
            payload: Box::new(error),
        }
    }

    /// Build from a payload returned by `std::panic::catch_unwind`
    ///
    /// A payload that already is a `Throwable` is unwrapped rather than
    /// wrapped again, so re-raised failures keep their identity.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Throwable>() {
            Ok(throwable) => return *throwable,
            Err(payload) => payload,
        };

        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            UNKNOWN_PANIC_MESSAGE.to_string()
        };

        Self { message, payload }
    }

    /// The panic message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the payload is of type `E`
    pub fn is<E: Any>(&self) -> bool {
        self.payload.is::<E>()
    }

    /// Borrow the payload as `E`, if that is its type
    pub fn downcast_ref<E: Any>(&self) -> Option<&E> {
        self.payload.downcast_ref::<E>()
    }

    /// Release the original panic payload
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

impl fmt::Debug for Throwable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throwable")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Identity equality: two `Throwable`s are equal when they hold the same
/// payload allocation, as a captured failure and its re-raised capture do.
///
/// Payloads of zero-sized types share an address and always compare equal.
impl PartialEq for Throwable {
    fn eq(&self, other: &Self) -> bool {
        let this = &*self.payload as *const (dyn Any + Send) as *const ();
        let that = &*other.payload as *const (dyn Any + Send) as *const ();
        this == that
    }
}

impl Eq for Throwable {}

impl From<Box<dyn Any + Send>> for Throwable {
    fn from(payload: Box<dyn Any + Send>) -> Self {
        Self::from_panic(payload)
    }
}
