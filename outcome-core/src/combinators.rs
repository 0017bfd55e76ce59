//! Combinators for mapping, chaining, recovering and unwrapping outcomes
//!
//! Every callback is taken as `FnOnce`, so it can run at most once. It runs
//! exactly once when its branch is taken and not at all otherwise.

use crate::outcome::{Failed, Outcome, Repr};
use core::convert::Infallible;
use core::fmt;
use core::ops::ControlFlow;

#[cfg(feature = "logging")]
use tracing::error;

impl<T, F> Outcome<T, F> {
    /// Apply `transform` to a successful value, passing a failure through
    ///
    /// ```
    /// use outcome_core::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(2);
    /// assert_eq!(ok.map(|v| v * 10), Outcome::success(20));
    /// ```
    #[inline]
    pub fn map<R, M>(self, transform: M) -> Outcome<R, F>
    where
        M: FnOnce(T) -> R,
    {
        match self.repr {
            Repr::Success(value) => Outcome::success(transform(value)),
            Repr::Failure(failed) => Outcome {
                repr: Repr::Failure(failed),
            },
        }
    }

    /// Chain a step that itself produces an outcome
    ///
    /// The outcome returned by `transform` is returned as is, without
    /// wrapping it a second time.
    #[inline]
    pub fn and_then<R, M>(self, transform: M) -> Outcome<R, F>
    where
        M: FnOnce(T) -> Outcome<R, F>,
    {
        match self.repr {
            Repr::Success(value) => transform(value),
            Repr::Failure(failed) => Outcome {
                repr: Repr::Failure(failed),
            },
        }
    }

    /// Turn a failure into a success with `transform`
    ///
    /// A panic inside `transform` is not caught; see
    /// [`recover_catching`](Outcome::recover_catching) for that.
    #[inline]
    pub fn recover<R, M>(self, transform: M) -> Outcome<R, F>
    where
        M: FnOnce(F) -> R,
        T: Into<R>,
    {
        match self.repr {
            Repr::Success(value) => Outcome::success(value.into()),
            Repr::Failure(Failed(failure)) => Outcome::success(transform(failure)),
        }
    }

    /// The successful value, or the result of `on_failure` for the failure
    #[inline]
    pub fn get_or_else<R, M>(self, on_failure: M) -> R
    where
        M: FnOnce(F) -> R,
        T: Into<R>,
    {
        match self.repr {
            Repr::Success(value) => value.into(),
            Repr::Failure(Failed(failure)) => on_failure(failure),
        }
    }

    /// The successful value, or `default` for a failure
    #[inline]
    pub fn get_or_default<R>(self, default: R) -> R
    where
        T: Into<R>,
    {
        match self.repr {
            Repr::Success(value) => value.into(),
            Repr::Failure(_) => default,
        }
    }

    /// Collapse both branches into one value
    #[inline]
    pub fn fold<R, S, E>(self, on_success: S, on_failure: E) -> R
    where
        S: FnOnce(T) -> R,
        E: FnOnce(F) -> R,
    {
        match self.repr {
            Repr::Success(value) => on_success(value),
            Repr::Failure(Failed(failure)) => on_failure(failure),
        }
    }

    /// Run `action` on a successful value and hand back the outcome unchanged
    #[inline]
    pub fn on_success<A>(self, action: A) -> Self
    where
        A: FnOnce(&T),
    {
        if let Repr::Success(value) = &self.repr {
            action(value);
        }
        self
    }

    /// Run `action` on a failure payload and hand back the outcome unchanged
    #[inline]
    pub fn on_failure<A>(self, action: A) -> Self
    where
        A: FnOnce(&F),
    {
        if let Repr::Failure(Failed(failure)) = &self.repr {
            action(failure);
        }
        self
    }

    /// The successful value, or whatever `on_failure` makes of this failure
    ///
    /// `on_failure` receives the original failure re-typed as
    /// `Outcome<Never, F>`, so it can be handed back from an enclosing scope
    /// with [`widen`](Outcome::widen). The [`propagate!`](crate::propagate)
    /// macro is the early-return form of this call.
    ///
    /// ```
    /// use outcome_core::Outcome;
    ///
    /// let err: Outcome<i32, &str> = Outcome::failure("X");
    /// let message = err.when_failure(|failed| failed.failure_or_none().unwrap().len() as i32);
    /// assert_eq!(message, 1);
    /// ```
    #[inline]
    pub fn when_failure<R, M>(self, on_failure: M) -> R
    where
        M: FnOnce(Outcome<Infallible, F>) -> R,
        T: Into<R>,
    {
        match self.repr {
            Repr::Success(value) => value.into(),
            Repr::Failure(failed) => on_failure(Outcome {
                repr: Repr::Failure(failed),
            }),
        }
    }

    /// Split into the value to continue with or the failure to stop on
    #[inline]
    pub fn branch(self) -> ControlFlow<Outcome<Infallible, F>, T> {
        self.map(ControlFlow::<Outcome<Infallible, F>, T>::Continue)
            .when_failure(ControlFlow::Break)
    }

    /// The successful value; panics on a failure
    ///
    /// Meant for paths already proven to succeed, such as tests. The panic
    /// message embeds the failure's string form.
    ///
    /// # Panics
    ///
    /// Panics with ``expected success but was `Failure(..)` `` if this is a
    /// failure.
    ///
    /// Requires `F: Display` to build that message. A failure type that is
    /// only `Debug` has to be converted first, for example through
    /// `into_result().unwrap()`, or unwrapped with [`fold`](Outcome::fold).
    #[track_caller]
    pub fn assert_success(self) -> T
    where
        F: fmt::Display,
    {
        match self.repr {
            Repr::Success(value) => value,
            Repr::Failure(failed) => {
                #[cfg(feature = "logging")]
                error!("assert_success on {}", failed);

                panic!("expected success but was `{failed}`")
            }
        }
    }
}

impl<F> Outcome<Infallible, F> {
    /// Re-type a pure failure into an outcome of any success type
    #[inline]
    pub fn widen<T>(self) -> Outcome<T, F> {
        match self.repr {
            Repr::Success(never) => match never {},
            Repr::Failure(failed) => Outcome {
                repr: Repr::Failure(failed),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::{String, ToString};
    use core::cell::Cell;

    fn ok() -> Outcome<i32, &'static str> {
        Outcome::success(7)
    }

    fn err() -> Outcome<i32, &'static str> {
        Outcome::failure("boom")
    }

    #[test]
    fn test_map() {
        let calls = Cell::new(0);
        let mapped = ok().map(|v| {
            calls.set(calls.get() + 1);
            v + 1
        });
        assert_eq!(mapped, Outcome::success(8));
        assert_eq!(calls.get(), 1);

        let mapped = err().map(|v| {
            calls.set(calls.get() + 1);
            v + 1
        });
        assert_eq!(mapped, Outcome::failure("boom"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_and_then_does_not_double_wrap() {
        let calls = Cell::new(0);
        let chained: Outcome<String, &str> = ok().and_then(|v| {
            calls.set(calls.get() + 1);
            Outcome::success(v.to_string())
        });
        assert_eq!(chained, Outcome::success("7".to_string()));

        let chained: Outcome<String, &str> = ok().and_then(|_| {
            calls.set(calls.get() + 1);
            Outcome::failure("inner")
        });
        assert_eq!(chained, Outcome::failure("inner"));
        assert_eq!(calls.get(), 2);

        let chained: Outcome<String, &str> = err().and_then(|v| {
            calls.set(calls.get() + 1);
            Outcome::success(v.to_string())
        });
        assert_eq!(chained, Outcome::failure("boom"));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_recover() {
        let calls = Cell::new(0);
        let recovered: Outcome<i32, &str> = ok().recover(|_| {
            calls.set(calls.get() + 1);
            42
        });
        assert_eq!(recovered, Outcome::success(7));
        assert_eq!(calls.get(), 0);

        let recovered: Outcome<i32, &str> = err().recover(|f| {
            calls.set(calls.get() + 1);
            f.len() as i32
        });
        assert_eq!(recovered, Outcome::success(4));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_recover_widens_success_type() {
        let narrow: Outcome<u8, &str> = Outcome::success(200);
        let wide: Outcome<u32, &str> = narrow.recover(|_| 0u32);
        assert_eq!(wide, Outcome::success(200u32));
    }

    #[test]
    fn test_get_or_else() {
        let calls = Cell::new(0);
        let value: i32 = ok().get_or_else(|_| {
            calls.set(calls.get() + 1);
            -1
        });
        assert_eq!(value, 7);
        assert_eq!(calls.get(), 0);

        let value: i32 = err().get_or_else(|_| {
            calls.set(calls.get() + 1);
            -1
        });
        assert_eq!(value, -1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_get_or_default() {
        let value: i32 = ok().get_or_default(0);
        assert_eq!(value, 7);
        let value: i32 = err().get_or_default(0);
        assert_eq!(value, 0);

        let name: Outcome<&str, u8> = Outcome::failure(1);
        assert_eq!(name.get_or_default("DEF"), "DEF");
    }

    #[test]
    fn test_fold_calls_one_branch() {
        let success_calls = Cell::new(0);
        let failure_calls = Cell::new(0);

        let folded = ok().fold(
            |v| {
                success_calls.set(success_calls.get() + 1);
                format!("V:{v}")
            },
            |f| {
                failure_calls.set(failure_calls.get() + 1);
                format!("EX:{f}")
            },
        );
        assert_eq!(folded, "V:7");
        assert_eq!((success_calls.get(), failure_calls.get()), (1, 0));

        let folded = err().fold(
            |v| {
                success_calls.set(success_calls.get() + 1);
                format!("V:{v}")
            },
            |f| {
                failure_calls.set(failure_calls.get() + 1);
                format!("EX:{f}")
            },
        );
        assert_eq!(folded, "EX:boom");
        assert_eq!((success_calls.get(), failure_calls.get()), (1, 1));
    }

    #[test]
    fn test_on_success_and_on_failure() {
        let s_cnt = Cell::new(0);
        let f_cnt = Cell::new(0);

        assert_eq!(ok(), ok().on_success(|_| s_cnt.set(s_cnt.get() + 1)));
        assert_eq!(ok(), ok().on_failure(|_| f_cnt.set(f_cnt.get() + 1)));
        assert_eq!((s_cnt.get(), f_cnt.get()), (1, 0));

        s_cnt.set(0);
        assert_eq!(err(), err().on_success(|_| s_cnt.set(s_cnt.get() + 1)));
        assert_eq!(err(), err().on_failure(|_| f_cnt.set(f_cnt.get() + 1)));
        assert_eq!((s_cnt.get(), f_cnt.get()), (0, 1));
    }

    #[test]
    fn test_when_failure_hands_back_original_failure() {
        let calls = Cell::new(0);
        let value: i32 = ok().when_failure(|_| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(value, 7);
        assert_eq!(calls.get(), 0);

        let mut seen = None;
        let value: i32 = err().when_failure(|failed| {
            calls.set(calls.get() + 1);
            seen = Some(failed);
            0
        });
        assert_eq!(value, 0);
        assert_eq!(calls.get(), 1);
        assert_eq!(seen.map(Outcome::widen), Some(err()));
    }

    #[test]
    fn test_branch() {
        assert_eq!(ok().branch(), ControlFlow::Continue(7));
        match err().branch() {
            ControlFlow::Break(failed) => assert_eq!(failed.failure_or_none(), Some("boom")),
            ControlFlow::Continue(v) => panic!("unexpected value {v}"),
        }
    }

    #[test]
    fn test_widen() {
        let pure: Outcome<Infallible, &str> = Outcome::failure("e");
        let widened: Outcome<String, &str> = pure.widen();
        assert_eq!(widened.to_string(), "Failure(e)");
    }

    #[test]
    fn test_assert_success() {
        assert_eq!(ok().assert_success(), 7);
    }

    #[test]
    #[should_panic(expected = "expected success but was `Failure(boom)`")]
    fn test_assert_success_panics_on_failure() {
        let _ = err().assert_success();
    }

    #[derive(Debug, PartialEq)]
    struct Opaque(u8);

    #[test]
    fn test_debug_only_failure_unwraps_through_fold() {
        let ok: Outcome<i32, Opaque> = Outcome::success(3);
        assert_eq!(ok.fold(|v| v, |_| -1), 3);
        assert_eq!(Outcome::<i32, Opaque>::success(4).into_result().unwrap(), 4);
    }

    #[test]
    #[should_panic(expected = "Opaque(9)")]
    fn test_debug_only_failure_panics_through_result() {
        let failed: Outcome<i32, Opaque> = Outcome::failure(Opaque(9));
        let _ = failed.into_result().unwrap();
    }
}
