//! Streaming printer
//!
//! Emits terms one at a time while carrying `(previous, current, count)`.
//! The running state is private; callers only choose how many terms to emit
//! and where they go.

use std::io::Write;

use crate::common::{Error, Result};

/// Running state between emitted terms.
///
/// A `None` term has overflowed `u64`. It is only an error once it has to be
/// written out.
#[derive(Debug, Clone, Copy)]
struct PrinterState {
    previous: Option<u64>,
    current: Option<u64>,
    count: usize,
}

impl PrinterState {
    fn seed() -> Self {
        Self {
            previous: Some(0),
            current: Some(1),
            count: 0,
        }
    }

    fn advance(self) -> Self {
        let next = self
            .previous
            .zip(self.current)
            .and_then(|(a, b)| a.checked_add(b));
        Self {
            previous: self.current,
            current: next,
            count: self.count + 1,
        }
    }
}

/// Write the first `n` Fibonacci numbers to `out`, one per line.
///
/// `n == 0` writes nothing.
pub fn fibonacci_print<W: Write>(n: usize, out: &mut W) -> Result<()> {
    emit_from(PrinterState::seed(), n, out)?;
    out.flush()?;
    Ok(())
}

fn emit_from<W: Write>(mut state: PrinterState, n: usize, out: &mut W) -> Result<()> {
    while state.count < n {
        let value = state
            .previous
            .ok_or_else(|| Error::overflow(state.count as u64))?;
        writeln!(out, "{value}")?;
        tracing::trace!(index = state.count, value, "Emitted term");
        state = state.advance();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(n: usize) -> Vec<u64> {
        let mut buf = Vec::new();
        fibonacci_print(n, &mut buf).unwrap();
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(|l| l.parse().unwrap())
            .collect()
    }

    #[test]
    fn test_first_ten() {
        assert_eq!(printed(10), vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn test_one_value_per_line() {
        let mut buf = Vec::new();
        fibonacci_print(4, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0\n1\n1\n2\n");
    }

    #[test]
    fn test_zero_prints_nothing() {
        let mut buf = Vec::new();
        fibonacci_print(0, &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_deep_count_does_not_recurse() {
        // Every term past index 93 overflows, but all 94 valid terms come first.
        let mut buf = Vec::new();
        let err = fibonacci_print(1_000_000, &mut buf).unwrap_err();
        assert!(matches!(err, Error::Overflow { index: 94 }));
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 94);
    }

    #[test]
    fn test_largest_fitting_count() {
        let values = printed(94);
        assert_eq!(values.len(), 94);
        assert_eq!(values[93], 12_200_160_415_121_876_738);
    }

    #[test]
    fn test_repeated_calls_match() {
        assert_eq!(printed(25), printed(25));
    }

    #[test]
    fn test_write_error_propagates() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = fibonacci_print(3, &mut Closed).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
