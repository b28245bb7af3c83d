//! Aggregation of parsed responses into summary counters.
//!
//! This module turns the responses of each block into:
//! - Block and transaction counts
//! - Parse and I/O error counts
//! - CPU, RAM and storage gas sums

pub mod stats;
pub mod summing;

// Re-export main types and functions
pub use stats::Stats;
pub use summing::{aggregate, aggregate_block, BlockResponses};
