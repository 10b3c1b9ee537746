//! CLI command definitions
//!
//! Defines the clap commands for the Fibonacci CLI.

use clap::Subcommand;

use crate::common::config::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the first N Fibonacci numbers iteratively
    #[command(alias = "seq")]
    Sequence {
        /// Number of terms (always at least the seed values 0 and 1)
        #[arg(allow_negative_numbers = true)]
        count: i64,

        /// Output format (default from config, else text)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Stream the first N Fibonacci numbers, one per line
    Print {
        /// Number of terms to print
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },

    /// Compute the Nth Fibonacci number (0-indexed) by naive recursion
    Nth {
        /// Index of the term
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Run all three strategies back to back
    Demo {
        /// Terms to build and print (default from config, else 20)
        #[arg(long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// Index for the naive recursion (default from config, else 10)
        #[arg(long, allow_negative_numbers = true)]
        index: Option<i64>,
    },

    /// Show the configuration file location and effective values
    Config,
}
