//! Byte-driven entry points for outcome-core combinators
//!
//! [`fuzz_chain`] and [`fuzz_attempt`] take arbitrary input and panic only
//! when an invariant breaks. The unit tests below drive them with fixed
//! inputs; any byte source can call them the same way.

use outcome_core::{attempt, Outcome};
use std::cell::Cell;

/// Drive a combinator chain from raw bytes, checking call counts as it goes.
///
/// Each byte picks an operation and supplies its operand. Panics only when an
/// invariant is broken.
pub fn fuzz_chain(data: &[u8]) {
    let Some((&first, ops)) = data.split_first() else {
        return;
    };

    let mut outcome: Outcome<u8, u8> = if first & 1 == 0 {
        Outcome::success(first)
    } else {
        Outcome::failure(first)
    };

    for &op in ops {
        let calls = Cell::new(0u32);
        let was_success = outcome.is_success();
        let operand = op >> 3;
        let bump = || calls.set(calls.get() + 1);

        outcome = match op & 0b111 {
            0 => outcome.map(|v| {
                bump();
                v.wrapping_add(operand)
            }),
            1 => outcome.and_then(|v| {
                bump();
                if v % 3 == 0 {
                    Outcome::failure(v)
                } else {
                    Outcome::success(v ^ operand)
                }
            }),
            2 => outcome.recover(|f| {
                bump();
                f.wrapping_mul(operand)
            }),
            3 => outcome
                .on_success(|_| bump())
                .on_failure(|_| bump()),
            4 => Outcome::success(outcome.get_or_else(|f| {
                bump();
                f
            })),
            5 => Outcome::success(outcome.fold(
                |v| {
                    bump();
                    v
                },
                |f| {
                    bump();
                    !f
                },
            )),
            6 => {
                let value: u8 = outcome.when_failure(|failed| {
                    bump();
                    failed.failure_or_none().unwrap_or(operand)
                });
                if operand % 2 == 0 {
                    Outcome::success(value)
                } else {
                    Outcome::failure(value)
                }
            }
            _ => Outcome::success(outcome.get_or_default(operand)),
        };

        assert_ne!(outcome.is_success(), outcome.is_failure());

        let expected = match op & 0b111 {
            0 | 1 => u32::from(was_success),
            2 | 4 | 6 => u32::from(!was_success),
            3 | 5 => 1,
            _ => 0,
        };
        assert_eq!(calls.get(), expected, "op {op:#04x} ran its callback wrongly");
    }
}

/// Run arbitrary bytes through the panic boundary; panics in the block are
/// captured, so this never panics itself.
pub fn fuzz_attempt(data: &[u8]) {
    let outcome = attempt(|| {
        let index = usize::from(data.first().copied().unwrap_or(0));
        data[index]
    });

    let in_bounds = data.first().is_some_and(|&i| usize::from(i) < data.len());
    assert_eq!(outcome.is_success(), in_bounds);
}
