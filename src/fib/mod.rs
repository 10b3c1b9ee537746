//! Fibonacci computation strategies
//!
//! Three independent approaches over the same sequence, seeded by 0 and 1:
//! - [`sequence`]: builds the first `n` terms iteratively
//! - [`printer`]: streams the first `n` terms to a writer, one per line
//! - [`nth`]: naive double recursion for a single term
//!
//! All values are `u64`. The largest representable term is `F(93)`;
//! anything past it is reported as [`Error::Overflow`](crate::Error::Overflow).

pub mod nth;
pub mod printer;
pub mod sequence;

pub use nth::fibonacci_nth;
pub use printer::fibonacci_print;
pub use sequence::fibonacci_loop;

/// Seed values the sequence is extended from
pub const SEED: [u64; 2] = [0, 1];

/// Largest index whose Fibonacci number fits in a `u64`
pub const MAX_INDEX: u32 = 93;
