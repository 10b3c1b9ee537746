//! Fibonacci CLI - Fibonacci numbers computed three ways
//!
//! Exposes the iterative builder, the streaming printer and the naive
//! recursive nth term as subcommands.

use std::path::PathBuf;

use clap::Parser;
use commands::Commands;
use fibonacci::common::{config::Config, logging};
use fibonacci::{cli, commands};

#[derive(Parser)]
#[command(name = "fib", about = "Fibonacci numbers computed three ways")]
#[command(version, long_about = None)]
struct Cli {
    /// Path to a config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging for this crate
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    logging::init_cli(cli.verbose);

    let config_path = cli.config.as_deref();
    let result = Config::load(config_path).and_then(|config| {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        cli::dispatch(cli.command, &config, config_path, &mut out)
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
