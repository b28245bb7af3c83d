use hotmoka_gas_stats::parser::{is_exempt, parse_response};
use hotmoka_gas_stats::utils::error::ParseError;
use hotmoka_gas_stats::utils::config::EXEMPT_RESPONSE_TYPES;
use pretty_assertions::assert_eq;

const SUCCESSFUL: &str = "\
JarStoreTransactionSuccessfulResponse:
  gas consumed for CPU execution: 14309
  gas consumed for RAM allocation: 4470
  gas consumed for storage consumption: 128017
  updates:
    <8f3d..#0|io.takamaka.code.lang.Gamete|balance:java.math.BigInteger|999>
  verified with verification version 0
  instrumented jar: 504b0304
";

#[test]
fn test_parse_successful_response() {
    let response = parse_response("3-8f3d", SUCCESSFUL).unwrap();

    assert_eq!(response.transaction_id(), "3-8f3d");
    assert_eq!(response.response_type(), "JarStoreTransactionSuccessfulResponse");
    assert_eq!(response.gas_cpu(), 14309);
    assert_eq!(response.gas_ram(), 4470);
    assert_eq!(response.gas_storage(), 128017);
}

#[test]
fn test_exempt_types_always_zero() {
    for response_type in EXEMPT_RESPONSE_TYPES {
        assert!(is_exempt(response_type));

        let with_gas = SUCCESSFUL.replace("JarStoreTransactionSuccessfulResponse", response_type);
        let response = parse_response("t0", &with_gas).unwrap();
        assert_eq!(
            (response.gas_cpu(), response.gas_ram(), response.gas_storage()),
            (0, 0, 0)
        );

        let bare = format!("{}:\n  classpath: 0000\n", response_type);
        let response = parse_response("t0", &bare).unwrap();
        assert_eq!(response.total_gas(), 0);
    }
}

#[test]
fn test_non_exempt_missing_each_field() {
    let cases = [
        ("  gas consumed for CPU execution: 14309\n", "gas_cpu"),
        ("  gas consumed for RAM allocation: 4470\n", "gas_ram"),
        ("  gas consumed for storage consumption: 128017\n", "gas_storage"),
    ];

    for (line, field) in cases {
        let content = SUCCESSFUL.replace(line, "");
        assert_eq!(
            parse_response("t0", &content),
            Err(ParseError::MissingField(field))
        );
    }
}

#[test]
fn test_windows_line_endings() {
    let content = SUCCESSFUL.replace('\n', "\r\n");
    let response = parse_response("t0", &content).unwrap();

    assert_eq!(response.response_type(), "JarStoreTransactionSuccessfulResponse");
    assert_eq!(response.gas_storage(), 128017);
}
