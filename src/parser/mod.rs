//! Response parsing and schema definitions.
//!
//! This module handles:
//! - Extracting the response type from `response.txt`
//! - Extracting CPU, RAM and storage gas
//! - Zeroing the gas of initial transactions

pub mod response;
pub mod schema;

// Re-export main types
pub use response::{is_exempt, parse_response, read_response};
pub use schema::Response;
