//! Parsed response data.

use serde::{Deserialize, Serialize};

/// Gas figures of one transaction response
///
/// Immutable once built by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    transaction_id: String,
    response_type: String,
    gas_cpu: u64,
    gas_ram: u64,
    gas_storage: u64,
}

impl Response {
    pub fn new(
        transaction_id: impl Into<String>,
        response_type: impl Into<String>,
        gas_cpu: u64,
        gas_ram: u64,
        gas_storage: u64,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            response_type: response_type.into(),
            gas_cpu,
            gas_ram,
            gas_storage,
        }
    }

    /// Name of the transaction directory the response was read from
    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    /// Response class name, e.g. `JarStoreTransactionSuccessfulResponse`
    pub fn response_type(&self) -> &str {
        &self.response_type
    }

    pub fn gas_cpu(&self) -> u64 {
        self.gas_cpu
    }

    pub fn gas_ram(&self) -> u64 {
        self.gas_ram
    }

    pub fn gas_storage(&self) -> u64 {
        self.gas_storage
    }

    /// Gas consumed for CPU, RAM and storage together
    pub fn total_gas(&self) -> u64 {
        self.gas_cpu
            .saturating_add(self.gas_ram)
            .saturating_add(self.gas_storage)
    }
}
