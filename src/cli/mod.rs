//! CLI command handling
//!
//! Validates raw command-line input against the configured limits, runs the
//! requested strategy and formats its output.

use std::io::Write;
use std::path::Path;

use crate::commands::Commands;
use crate::common::config::{Config, OutputFormat};
use crate::common::{Error, Result};
use crate::fib;

/// Dispatch a CLI command, writing results to `out`
pub fn dispatch<W: Write>(
    command: Commands,
    config: &Config,
    config_path: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Sequence { count, format } => {
            let count = checked_count("Count", count, config.limits.max_count)?;
            let format = format.unwrap_or(config.output.format);
            tracing::info!(count, ?format, "Building sequence");

            let sequence = fib::fibonacci_loop(count as usize)?;
            write_sequence(out, &sequence, format)
        }

        Commands::Print { count } => {
            let count = checked_count("Count", count, config.limits.max_count)?;
            tracing::info!(count, "Printing sequence");

            fib::fibonacci_print(count as usize, out)
        }

        Commands::Nth { index } => {
            let index = checked_count("Index", index, config.limits.max_nth)?;
            tracing::info!(index, "Computing nth term");

            let value = fib::fibonacci_nth(index_u32(index)?)?;
            writeln!(out, "{value}")?;
            Ok(())
        }

        Commands::Demo { count, index } => {
            let count = match count {
                Some(count) => checked_count("Count", count, config.limits.max_count)?,
                None => within_limit("Count", config.demo.count, config.limits.max_count)?,
            };
            let index = match index {
                Some(index) => checked_count("Index", index, config.limits.max_nth)?,
                None => within_limit("Index", config.demo.index, config.limits.max_nth)?,
            };
            tracing::info!(count, index, "Running demo");

            let sequence = fib::fibonacci_loop(count as usize)?;
            write_sequence(out, &sequence, OutputFormat::Text)?;
            fib::fibonacci_print(count as usize, out)?;
            let value = fib::fibonacci_nth(index_u32(index)?)?;
            writeln!(out, "{value}")?;
            Ok(())
        }

        Commands::Config => {
            match Config::resolved_path(config_path) {
                Some(path) if path.exists() => writeln!(out, "# {}", path.display())?,
                Some(path) => writeln!(out, "# {} (not found, using defaults)", path.display())?,
                None => writeln!(out, "# no config directory, using defaults")?,
            }
            write!(out, "{}", config.to_toml()?)?;
            Ok(())
        }
    }
}

/// Reject negative input and input above `limit`
fn checked_count(what: &str, value: i64, limit: u64) -> Result<u64> {
    let value = u64::try_from(value).map_err(|_| Error::NegativeCount(value))?;
    within_limit(what, value, limit)
}

fn within_limit(what: &str, value: u64, limit: u64) -> Result<u64> {
    if value > limit {
        tracing::warn!(what, value, limit, "Input above configured limit");
        return Err(Error::limit_exceeded(what, value, limit));
    }
    Ok(value)
}

fn index_u32(index: u64) -> Result<u32> {
    u32::try_from(index).map_err(|_| Error::overflow(index))
}

fn write_sequence<W: Write>(out: &mut W, sequence: &[u64], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let items: Vec<String> = sequence.iter().map(u64::to_string).collect();
            writeln!(out, "[{}]", items.join(", "))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, sequence)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
