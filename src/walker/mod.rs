//! Traversal of the chain directory.
//!
//! This module lists:
//! - Block directories (`b<N>`) under the root
//! - Transaction directories under each block
//! - The response file of each transaction

pub mod chain_dir;

// Re-export main functions
pub use chain_dir::{block_index, list_blocks, list_transactions, response_path};
