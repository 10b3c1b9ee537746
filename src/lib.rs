//! Fibonacci numbers three ways
//!
//! This library computes Fibonacci numbers with an iterative sequence
//! builder, a streaming printer and a naive recursive nth-term function.

pub mod cli;
pub mod commands;
pub mod common;
pub mod fib;

pub use common::{Error, Result};
pub use fib::{fibonacci_loop, fibonacci_nth, fibonacci_print};
