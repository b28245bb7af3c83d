//! Summary counters of a scan.

use crate::parser::schema::Response;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Counters accumulated over the transactions in scope
///
/// All counters saturate at `u64::MAX` instead of wrapping.
///
/// **Public** - result of aggregation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Blocks in scope
    #[serde(rename = "#blocks")]
    pub blocks: u64,

    /// Transactions in scope, parsed or not
    #[serde(rename = "#transactions")]
    pub transactions: u64,

    /// Transactions whose response could not be parsed
    pub transaction_errors: u64,

    /// Response files that could not be opened
    pub io_errors: u64,

    pub gas_cpu: u64,
    pub gas_ram: u64,
    pub gas_storage: u64,

    /// Parsed responses per response type
    #[serde(default)]
    pub by_type: BTreeMap<String, u64>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a successfully parsed transaction
    pub fn record(&mut self, response: &Response) {
        self.transactions = self.transactions.saturating_add(1);
        self.gas_cpu = self.gas_cpu.saturating_add(response.gas_cpu());
        self.gas_ram = self.gas_ram.saturating_add(response.gas_ram());
        self.gas_storage = self.gas_storage.saturating_add(response.gas_storage());
        let count = self
            .by_type
            .entry(response.response_type().to_string())
            .or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Count a transaction whose response could not be parsed
    pub fn record_error(&mut self) {
        self.transactions = self.transactions.saturating_add(1);
        self.transaction_errors = self.transaction_errors.saturating_add(1);
    }

    /// Add the counters of `other` into `self`
    pub fn merge(&mut self, other: &Stats) {
        self.blocks = self.blocks.saturating_add(other.blocks);
        self.transactions = self.transactions.saturating_add(other.transactions);
        self.transaction_errors = self.transaction_errors.saturating_add(other.transaction_errors);
        self.io_errors = self.io_errors.saturating_add(other.io_errors);
        self.gas_cpu = self.gas_cpu.saturating_add(other.gas_cpu);
        self.gas_ram = self.gas_ram.saturating_add(other.gas_ram);
        self.gas_storage = self.gas_storage.saturating_add(other.gas_storage);

        for (response_type, count) in &other.by_type {
            let total = self.by_type.entry(response_type.clone()).or_insert(0);
            *total = total.saturating_add(*count);
        }
    }

    /// Gas consumed for CPU, RAM and storage together
    pub fn total_gas(&self) -> u64 {
        self.gas_cpu
            .saturating_add(self.gas_ram)
            .saturating_add(self.gas_storage)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"#blocks\": {}, \"#transactions\": {}, \"transaction_errors\": {}, \"io_errors\": {}, \"gas_cpu\": {}, \"gas_ram\": {}, \"gas_storage\": {}}}",
            self.blocks,
            self.transactions,
            self.transaction_errors,
            self.io_errors,
            self.gas_cpu,
            self.gas_ram,
            self.gas_storage
        )
    }
}
