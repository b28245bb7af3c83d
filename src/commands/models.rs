use crate::aggregator::BlockResponses;
use crate::utils::config::DEFAULT_ROOT;
use std::path::PathBuf;

/// Arguments for the scan command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ScanArgs {
    /// Chain directory holding the `b<N>` block directories
    pub root: PathBuf,

    /// Only count blocks with at least this index
    pub min_block: Option<u64>,

    /// Read blocks in numeric order and transactions in name order;
    /// `ScanResult::blocks` is keyed by id whatever the read order
    pub sorted: bool,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,
}

impl Default for ScanArgs {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            min_block: None,
            sorted: false,
            output_json: None,
        }
    }
}

/// Everything read from the chain directory, before aggregation
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Responses per block; `None` for responses that could not be parsed
    pub blocks: BlockResponses,

    /// Response files that could not be opened
    pub io_errors: u64,
}
