//! Summing of parsed responses into [`Stats`].

use super::stats::Stats;
use crate::parser::schema::Response;
use crate::utils::error::AggregateError;
use crate::walker::block_index;
use log::debug;
use std::collections::BTreeMap;

/// Parsed responses grouped by block id; `None` marks an unparsable response
pub type BlockResponses = BTreeMap<String, Vec<Option<Response>>>;

/// Aggregate the responses of all blocks in scope
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `blocks` - Responses per block
/// * `io_errors` - Response files that could not be opened, carried through as is
/// * `min_block` - Skip blocks with a lower index
///
/// # Errors
/// * `AggregateError::InvalidBlockId` - a block id is not `b<N>` while a filter is set
pub fn aggregate(
    blocks: &BlockResponses,
    io_errors: u64,
    min_block: Option<u64>,
) -> Result<Stats, AggregateError> {
    let mut stats = Stats::new();
    stats.io_errors = io_errors;

    for (block, responses) in blocks {
        if let Some(min) = min_block {
            let index = block_index(block).map_err(|source| AggregateError::InvalidBlockId {
                block: block.clone(),
                source,
            })?;

            if index < min {
                debug!("Skipping block {} (below {})", block, min);
                continue;
            }
        }

        stats.merge(&aggregate_block(responses));
    }

    Ok(stats)
}

/// Counters of a single block
///
/// **Public** - building block of `aggregate`
pub fn aggregate_block(responses: &[Option<Response>]) -> Stats {
    let mut stats = Stats::new();
    stats.blocks = 1;

    for response in responses {
        match response {
            Some(response) => stats.record(response),
            None => stats.record_error(),
        }
    }

    stats
}
