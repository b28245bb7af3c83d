//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod scan;

// Re-export main command functions
pub use models::{ScanArgs, ScanResult};
pub use scan::{collect_responses, execute_scan, validate_args};
