//! Scan command implementation.
//!
//! The scan command:
//! 1. Lists the blocks of the chain directory
//! 2. Reads and parses the response of every transaction
//! 3. Aggregates the gas figures
//! 4. Prints the stats and writes the optional report

use super::models::{ScanArgs, ScanResult};
use crate::aggregator::{aggregate, Stats};
use crate::output::{write_report, StatsReport};
use crate::parser::read_response;
use crate::walker::{list_blocks, list_transactions, response_path};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

/// Execute the scan command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The aggregated stats, already printed to stdout
///
/// # Errors
/// * Directory listing failures
/// * Read failures other than a missing response file
/// * Report write errors
pub fn execute_scan(args: ScanArgs) -> Result<Stats> {
    let start_time = Instant::now();

    info!("Scanning chain directory: {}", args.root.display());

    info!("Step 1/3: Reading responses...");
    let scan = collect_responses(&args.root, args.sorted)
        .with_context(|| format!("Failed to scan {}", args.root.display()))?;

    debug!(
        "Read {} blocks, {} missing response files",
        scan.blocks.len(),
        scan.io_errors
    );

    info!("Step 2/3: Aggregating...");
    let stats = aggregate(&scan.blocks, scan.io_errors, args.min_block)
        .context("Failed to aggregate responses")?;

    for (response_type, count) in &stats.by_type {
        debug!("  {}: {}", response_type, count);
    }

    info!("Step 3/3: Writing output...");
    println!("{}", stats);

    if let Some(path) = &args.output_json {
        let report = StatsReport::new(args.root.display().to_string(), args.min_block, stats.clone());
        write_report(&report, path).context("Failed to write stats report")?;

        info!("✓ Report written to: {}", path.display());
    }

    let elapsed = start_time.elapsed();
    info!("Scan completed in {:.2}s", elapsed.as_secs_f64());

    Ok(stats)
}

/// Read the response of every transaction of every block
///
/// **Public** - the filesystem stage of the scan
///
/// A missing response file is counted in `io_errors` and the transaction is
/// skipped. Any other read error aborts the scan.
pub fn collect_responses(root: &Path, sorted: bool) -> Result<ScanResult> {
    let mut scan = ScanResult::default();

    for block in list_blocks(root, sorted)? {
        let mut responses = Vec::new();

        for transaction in list_transactions(root, &block, sorted)? {
            let path = response_path(root, &block, &transaction);

            match read_response(&block, &transaction, &path) {
                Ok(response) => responses.push(response),
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    warn!("Missing response file {}", path.display());
                    scan.io_errors += 1;
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("Failed to read {}", path.display()));
                }
            }
        }

        scan.blocks.insert(block, responses);
    }

    Ok(scan)
}

/// Validate scan arguments
///
/// **Public** - can be called before execute_scan for early validation
pub fn validate_args(args: &ScanArgs) -> Result<()> {
    if args.root.as_os_str().is_empty() {
        anyhow::bail!("Chain directory cannot be empty");
    }

    if !args.root.exists() {
        anyhow::bail!("Chain directory does not exist: {}", args.root.display());
    }

    if !args.root.is_dir() {
        anyhow::bail!("Chain directory is not a directory: {}", args.root.display());
    }

    Ok(())
}
