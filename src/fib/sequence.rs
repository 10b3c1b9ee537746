//! Iterative sequence builder

use super::{MAX_INDEX, SEED};
use crate::common::{Error, Result};

/// Build the first `n` Fibonacci numbers by iterative accumulation.
///
/// The result always starts with the seed `[0, 1]`, so counts below 2 still
/// return both seed values. Counts past the last term that fits in a `u64`
/// fail before anything is allocated.
pub fn fibonacci_loop(n: usize) -> Result<Vec<u64>> {
    let max_len = MAX_INDEX as usize + 1;
    if n > max_len {
        return Err(Error::overflow(u64::from(MAX_INDEX) + 1));
    }

    let mut sequence = Vec::with_capacity(n.max(SEED.len()));
    sequence.extend_from_slice(&SEED);

    for i in SEED.len()..n {
        let next = sequence[i - 1]
            .checked_add(sequence[i - 2])
            .ok_or_else(|| Error::overflow(i as u64))?;
        sequence.push(next);
    }

    tracing::debug!(requested = n, produced = sequence.len(), "Built sequence");
    Ok(sequence)
}
