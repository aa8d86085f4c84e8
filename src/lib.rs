//! Public-facing crate root: re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod output;

pub use core::{
    error::{CountError, UsageError},
    escape::escape,
    row::{Row, rows},
    tally::{Tally, accumulate},
};

pub use output::{Dialect, LineTerminator, WriterOptions, resolve_delimiter};

/// Convenience function. Tallies an in-memory string, counts keyed by
/// character in first-seen order.
#[must_use]
pub fn tally_str(input: &str) -> Tally {
    let mut tally = Tally::new();
    for c in input.chars() {
        *tally.entry(c).or_insert(0) += 1;
    }
    tally
}
