//! Ledger Engine CLI
//!
//! Command-line interface for running ledger sessions from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- session.csv > accounts.csv
//! RUST_LOG=ledger_engine=debug cargo run -- session.csv > accounts.csv
//! ```
//!
//! The program reads session operations (account opens and transfers)
//! from the input CSV file, runs them through the ledger engine, and
//! outputs the final account states to stdout. Rejected rows are logged
//! to stderr and skipped; they never abort the session.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use ledger_engine::cli;
use ledger_engine::session;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Log to stderr so session output on stdout stays clean.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::parse_args();

    let mut output = std::io::stdout();
    if let Err(e) = session::run_file(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
