//! JSON report schema.
//!
//! Schema is versioned to allow future evolution.

use crate::aggregator::Stats;
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Chain directory that was scanned
    pub root: String,

    /// Minimum block index, if a filter was applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_block: Option<u64>,

    /// Aggregated counters
    pub stats: Stats,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

impl StatsReport {
    /// Wrap the stats of a scan, stamped with the current time
    pub fn new(root: impl Into<String>, min_block: Option<u64>, stats: Stats) -> Self {
        use chrono::Utc;

        Self {
            version: SCHEMA_VERSION.to_string(),
            root: root.into(),
            min_block,
            stats,
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}
