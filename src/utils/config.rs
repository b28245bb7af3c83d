//! Configuration and constants for the CLI.

/// Default chain directory, as created by a Hotmoka node started in the current directory
pub const DEFAULT_ROOT: &str = "chain";

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Name of the file holding the textual form of a transaction response
pub const RESPONSE_FILE_NAME: &str = "response.txt";

/// Block directories are named `b<index>`
pub const BLOCK_PREFIX: char = 'b';

/// Indentation of the detail lines of a response
pub const DETAIL_INDENT: &str = "  ";

// Gas lines inside a response, after the indentation
pub const GAS_CPU_PREFIX: &str = "gas consumed for CPU execution: ";
pub const GAS_RAM_PREFIX: &str = "gas consumed for RAM allocation: ";
pub const GAS_STORAGE_PREFIX: &str = "gas consumed for storage consumption: ";

/// Responses of initial transactions: they carry no gas cost
pub const EXEMPT_RESPONSE_TYPES: &[&str] = &[
    "JarStoreInitialTransactionResponse",
    "GameteCreationTransactionResponse",
    "InitializationTransactionResponse",
];
