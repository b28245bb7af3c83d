//! Hotmoka Gas Stats
//!
//! Gas consumption statistics over the `response.txt` files that a
//! Hotmoka node writes in its chain directory.
//!
//! This crate provides the core implementation for the
//! `hotmoka-gas-stats` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! hotmoka-gas-stats --root chain      # all blocks
//! hotmoka-gas-stats --root chain 100  # blocks b100 and later
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
pub mod walker;
