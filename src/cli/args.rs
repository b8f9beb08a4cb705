use clap::Parser;
use std::path::PathBuf;

/// Run a ledger session from a CSV file
#[derive(Parser, Debug)]
#[command(name = "ledger-engine")]
#[command(about = "Run account opens and transfers from a session CSV", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing session operations
    #[arg(value_name = "INPUT", help = "Path to the session CSV file")]
    pub input_file: PathBuf,
}
