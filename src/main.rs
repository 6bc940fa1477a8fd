//! Command-line front end: prints every boolean permutation of `N` bits as a
//! single line of JSON.
//!
//! Only the first argument is read; anything after it is ignored. Every failure
//! prints its message to stderr and exits with status 1. Logging goes to stderr
//! and is controlled with `RUST_LOG`.

use anyhow::Result;
use binperm::{enumerate, Error, Permutation};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "binperm", version)]
#[command(about = "Print all binary permutations of N bits", long_about = None)]
struct Cli {
    /// Number of bits (a non-negative integer)
    #[arg(value_name = "N", allow_hyphen_values = true)]
    n: Option<String>,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let n = cli.n.ok_or_else(Error::invalid_bit_length)?;
    let all: Vec<Permutation> = enumerate(n)?.collect();
    tracing::info!(count = all.len(), "enumeration complete");

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &all)?;
    writeln!(stdout)?;
    Ok(())
}
