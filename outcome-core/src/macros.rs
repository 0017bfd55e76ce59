//! Early-return propagation

/// Unwrap a successful outcome or return its failure from the enclosing
/// function or closure.
///
/// `propagate!(step())` evaluates `step()` once. On success it yields the
/// value; on failure it returns the original failure, re-typed to the
/// enclosing scope's `Outcome<_, F>`. Later expressions are not evaluated.
///
/// ```
/// use outcome_core::{propagate, Outcome};
///
/// fn half(n: i32) -> Outcome<i32, String> {
///     if n % 2 == 0 {
///         Outcome::success(n / 2)
///     } else {
///         Outcome::failure(format!("{n} is odd"))
///     }
/// }
///
/// fn quarter(n: i32) -> Outcome<i32, String> {
///     let h = propagate!(half(n));
///     half(h)
/// }
///
/// assert_eq!(quarter(8), Outcome::success(2));
/// assert_eq!(quarter(6), Outcome::failure("3 is odd".to_string()));
/// ```
#[macro_export]
macro_rules! propagate {
    ($outcome:expr $(,)?) => {
        match $crate::Outcome::branch($outcome) {
            ::core::ops::ControlFlow::Continue(value) => value,
            ::core::ops::ControlFlow::Break(failed) => return failed.widen(),
        }
    };
}
