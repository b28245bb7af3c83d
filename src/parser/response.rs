//! Parser for the textual form of transaction responses.
//!
//! A response file looks like:
//!
//! ```text
//! JarStoreTransactionSuccessfulResponse:
//!   gas consumed for CPU execution: 1234
//!   gas consumed for RAM allocation: 567
//!   gas consumed for storage consumption: 89
//!   ...
//! ```
//!
//! Only the response type and the three gas lines are extracted.

use super::schema::Response;
use crate::utils::config::{
    DETAIL_INDENT, EXEMPT_RESPONSE_TYPES, GAS_CPU_PREFIX, GAS_RAM_PREFIX, GAS_STORAGE_PREFIX,
};
use crate::utils::error::ParseError;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Field names used in error messages
const CPU_FIELD: &str = "gas_cpu";
const RAM_FIELD: &str = "gas_ram";
const STORAGE_FIELD: &str = "gas_storage";

/// Raw values found while scanning the lines of a response
#[derive(Debug, Default)]
struct RawFields<'a> {
    response_type: Option<String>,
    gas_cpu: Option<&'a str>,
    gas_ram: Option<&'a str>,
    gas_storage: Option<&'a str>,
}

/// Parse the content of a response file
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `transaction_id` - Transaction the response belongs to
/// * `content` - Full text of `response.txt`
///
/// # Returns
/// The parsed response. Responses of initial transactions always have zero gas.
///
/// # Errors
/// * `ParseError::MissingType` - No response type line
/// * `ParseError::MissingField` - A gas line is missing
/// * `ParseError::InvalidGas` - A gas line does not hold an unsigned integer
pub fn parse_response(transaction_id: &str, content: &str) -> Result<Response, ParseError> {
    let fields = scan_lines(content);

    let response_type = fields.response_type.ok_or(ParseError::MissingType)?;

    if is_exempt(&response_type) {
        debug!("{}: {} carries no gas", transaction_id, response_type);
        return Ok(Response::new(transaction_id, response_type, 0, 0, 0));
    }

    let gas_cpu = parse_gas_field(CPU_FIELD, fields.gas_cpu)?;
    let gas_ram = parse_gas_field(RAM_FIELD, fields.gas_ram)?;
    let gas_storage = parse_gas_field(STORAGE_FIELD, fields.gas_storage)?;

    Ok(Response::new(
        transaction_id,
        response_type,
        gas_cpu,
        gas_ram,
        gas_storage,
    ))
}

/// Read and parse the response file of a transaction
///
/// **Public** - used by the scan command
///
/// The file is read fully and closed before parsing. A response that cannot
/// be parsed is logged with its block and transaction and yields `Ok(None)`.
///
/// # Errors
/// Any I/O error while opening or reading the file; the caller decides
/// whether it is fatal.
pub fn read_response(block: &str, transaction: &str, path: &Path) -> io::Result<Option<Response>> {
    let content = fs::read_to_string(path)?;

    match parse_response(transaction, &content) {
        Ok(response) => Ok(Some(response)),
        Err(e) => {
            warn!("Cannot parse response of block {} transaction {}: {}", block, transaction, e);
            Ok(None)
        }
    }
}

/// Whether a response type belongs to an initial transaction
pub fn is_exempt(response_type: &str) -> bool {
    EXEMPT_RESPONSE_TYPES.contains(&response_type)
}

/// Collect the response type and the raw gas values
///
/// **Private** - internal helper for parse_response
fn scan_lines(content: &str) -> RawFields<'_> {
    let mut fields = RawFields::default();

    for line in content.split_inclusive('\n') {
        if let Some(detail) = line.strip_prefix(DETAIL_INDENT) {
            let detail = detail.trim_end_matches(['\r', '\n']);

            if let Some(value) = detail.strip_prefix(GAS_CPU_PREFIX) {
                fields.gas_cpu = Some(value);
            } else if let Some(value) = detail.strip_prefix(GAS_RAM_PREFIX) {
                fields.gas_ram = Some(value);
            } else if let Some(value) = detail.strip_prefix(GAS_STORAGE_PREFIX) {
                fields.gas_storage = Some(value);
            }
        } else if fields.response_type.is_none() {
            let response_type = strip_type_suffix(line);
            if !response_type.is_empty() {
                fields.response_type = Some(response_type.to_string());
            }
        }
    }

    fields
}

/// Remove the trailing punctuation and line terminator of the type line
///
/// **Private** - `"Foo:\n"` and `"Foo:\r\n"` become `"Foo"`, as does an
/// unterminated `"Foo:"`
fn strip_type_suffix(line: &str) -> &str {
    let body = line
        .strip_suffix('\n')
        .map(|body| body.strip_suffix('\r').unwrap_or(body))
        .unwrap_or(line);

    // one punctuation character after the class name
    let mut chars = body.chars();
    chars.next_back();
    chars.as_str()
}

/// Parse one gas value
///
/// **Private** - internal utility
fn parse_gas_field(field: &'static str, raw: Option<&str>) -> Result<u64, ParseError> {
    let raw = raw.ok_or(ParseError::MissingField(field))?;

    raw.trim().parse::<u64>().map_err(|_| ParseError::InvalidGas {
        field,
        value: raw.to_string(),
    })
}
