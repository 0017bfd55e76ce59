//! Capturing panics from code that does not return outcomes

use anyhow::{anyhow, Result};
use outcome_core::{attempt, raise, Outcome, Throwable};
use std::fmt;
use tracing_subscriber::{fmt as log_fmt, prelude::*, EnvFilter};

#[derive(Debug)]
struct QuotaExceeded {
    used: u32,
    limit: u32,
}

impl fmt::Display for QuotaExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "quota exceeded: {}/{}", self.used, self.limit)
    }
}

/// Stand-in for a library that reports errors by panicking
fn legacy_reserve(used: u32, request: u32) -> u32 {
    let limit = 100;
    if used + request > limit {
        raise(QuotaExceeded {
            used: used + request,
            limit,
        });
    }
    assert!(request > 0, "empty reservation");
    used + request
}

fn reserve(used: u32, request: u32) -> Outcome<u32, Throwable> {
    attempt(|| legacy_reserve(used, request))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(log_fmt::layer())
        .with(EnvFilter::new("debug"))
        .init();

    // Keep captured panics from printing through the default hook
    std::panic::set_hook(Box::new(|_| {}));

    println!("Outcome panic boundary example\n");

    for (used, request) in [(10, 20), (90, 20), (10, 0)] {
        let outcome = reserve(used, request);
        match outcome.as_ref().failure_or_none() {
            None => println!("reserve({used}, {request}) -> ok"),
            Some(t) => match t.downcast_ref::<QuotaExceeded>() {
                Some(q) => println!("reserve({used}, {request}) -> over by {}", q.used - q.limit),
                None => println!("reserve({used}, {request}) -> {}", t.message()),
            },
        }
    }

    // A failing transform later in the chain is captured too
    let doubled = reserve(10, 50).map_catching(|total| legacy_reserve(total, total));
    println!("\ndoubled: {doubled}");

    let fallback: Outcome<u32, Throwable> = reserve(90, 20).recover_catching(|_| 0);
    println!("fallback: {fallback}");

    let total = reserve(10, 30)
        .into_result()
        .map_err(|t| anyhow!("reservation failed: {t}"))?;
    println!("total: {total}");

    Ok(())
}
