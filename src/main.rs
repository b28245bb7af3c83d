//! Hotmoka Gas Stats CLI
//!
//! Sums the CPU, RAM and storage gas recorded in the transaction
//! responses of a Hotmoka chain directory.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use hotmoka_gas_stats::commands::{execute_scan, validate_args, ScanArgs};
use hotmoka_gas_stats::utils::config::DEFAULT_ROOT;

/// Hotmoka Gas Stats - gas consumption of a Hotmoka chain
#[derive(Parser, Debug)]
#[command(name = "hotmoka-gas-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Only count blocks with at least this index
    min_block: Option<u64>,

    /// Chain directory holding the b<N> block directories
    #[arg(short, long, env = "HOTMOKA_CHAIN_DIR", default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// Read blocks in numeric order and transactions in name order
    /// (affects log order only; the stats are order-independent)
    #[arg(long)]
    sorted: bool,

    /// Output path for a JSON report (optional)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = ScanArgs {
        root: cli.root,
        min_block: cli.min_block,
        sorted: cli.sorted,
        output_json: cli.json,
    };

    validate_args(&args)?;
    execute_scan(args)?;

    Ok(())
}
