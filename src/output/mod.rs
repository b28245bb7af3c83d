//! Output of scan results.
//!
//! The stats mapping is printed by the command layer; this module
//! handles the optional JSON report file.

pub mod json;
pub mod report;

// Re-export main functions
pub use json::write_report;
pub use report::StatsReport;
