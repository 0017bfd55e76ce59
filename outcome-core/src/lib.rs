//! # Outcome Core
//!
//! A two-state success/failure container with a combinator library for
//! composing, transforming and unwrapping outcomes without panicking.
//!
//! ## Modules
//!
//! - `outcome`: The [`Outcome`] type, constructors and inspection
//! - `combinators`: Mapping, chaining, recovery and short-circuit propagation
//! - `ext`: `into_success` / `into_failure` sugar
//! - `error`: [`Throwable`], the failure payload of a captured panic (std only)
//! - `throwable`: Panic capture and re-raise boundary (std only)
//!
//! ## Short-circuit propagation
//!
//! ```
//! use outcome_core::{propagate, Outcome};
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input.parse::<i32>().map_err(|_| format!("not a number: {input}")).into()
//! }
//!
//! fn sum(a: &str, b: &str) -> Outcome<i32, String> {
//!     let total = propagate!(parse(a)) + propagate!(parse(b));
//!     Outcome::success(total)
//! }
//!
//! assert_eq!(sum("1", "2"), Outcome::success(3));
//! assert_eq!(sum("1", "x"), Outcome::failure("not a number: x".to_string()));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
extern crate alloc;

pub mod combinators;
#[cfg(feature = "std")]
pub mod error;
pub mod ext;
mod macros;
pub mod outcome;
#[cfg(feature = "std")]
pub mod throwable;

// Re-export commonly used types
pub use ext::{IntoFailure, IntoSuccess};
pub use outcome::Outcome;

#[cfg(feature = "std")]
pub use error::Throwable;
#[cfg(feature = "std")]
pub use throwable::{attempt, attempt_with, raise};

/// The uninhabited type used for the unreachable side of a pure outcome
pub use core::convert::Infallible as Never;
