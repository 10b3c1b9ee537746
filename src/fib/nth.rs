//! Naive recursive nth term
//!
//! Two independent recursive calls per level with no memoisation, so the
//! call count grows exponentially with `n`. Kept that way on purpose as the
//! slow baseline next to the other two strategies.

use super::MAX_INDEX;
use crate::common::{Error, Result};

/// Compute the `n`-th Fibonacci number (0-indexed) by naive recursion.
///
/// Indices past [`MAX_INDEX`] are rejected up front rather than after an
/// exponential amount of work.
pub fn fibonacci_nth(n: u32) -> Result<u64> {
    if n > MAX_INDEX {
        return Err(Error::overflow(n));
    }
    naive(n)
}

fn naive(n: u32) -> Result<u64> {
    if n <= 1 {
        return Ok(u64::from(n));
    }
    naive(n - 1)?
        .checked_add(naive(n - 2)?)
        .ok_or_else(|| Error::overflow(n))
}
