use hotmoka_gas_stats::commands::{collect_responses, execute_scan, ScanArgs};
use hotmoka_gas_stats::output::StatsReport;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

const SOME_RESPONSE: &str = "\
SomeResponseType;
  gas consumed for CPU execution: 10
  gas consumed for RAM allocation: 5
  gas consumed for storage consumption: 2
";

fn write_response(root: &Path, block: &str, transaction: &str, content: &str) {
    let dir = root.join(block).join(transaction);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("response.txt"), content).unwrap();
}

#[test]
fn test_single_block_end_to_end() {
    let chain = tempfile::tempdir().unwrap();
    write_response(chain.path(), "b0", "t0", SOME_RESPONSE);

    let stats = execute_scan(ScanArgs {
        root: chain.path().to_path_buf(),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(stats.blocks, 1);
    assert_eq!(stats.transactions, 1);
    assert_eq!(stats.transaction_errors, 0);
    assert_eq!(stats.io_errors, 0);
    assert_eq!((stats.gas_cpu, stats.gas_ram, stats.gas_storage), (10, 5, 2));
}

#[test]
fn test_filter_and_errors() {
    let chain = tempfile::tempdir().unwrap();
    write_response(chain.path(), "b0", "t0", SOME_RESPONSE);
    write_response(chain.path(), "b2", "t0", SOME_RESPONSE);
    write_response(chain.path(), "b2", "t1", "SomeResponseType;\n  gas consumed for CPU execution: 1\n");
    fs::create_dir_all(chain.path().join("b2/t2")).unwrap();

    let stats = execute_scan(ScanArgs {
        root: chain.path().to_path_buf(),
        min_block: Some(1),
        sorted: true,
        ..Default::default()
    })
    .unwrap();

    assert_eq!(stats.blocks, 1);
    assert_eq!(stats.transactions, 2);
    assert_eq!(stats.transaction_errors, 1);
    assert_eq!(stats.io_errors, 1);
    assert_eq!((stats.gas_cpu, stats.gas_ram, stats.gas_storage), (10, 5, 2));
}

#[test]
fn test_collect_groups_by_block() {
    let chain = tempfile::tempdir().unwrap();
    write_response(chain.path(), "b0", "0-aa", SOME_RESPONSE);
    write_response(chain.path(), "b0", "1-bb", "GameteCreationTransactionResponse:\n");
    write_response(chain.path(), "b1", "0-cc", "broken");

    let scan = collect_responses(chain.path(), true).unwrap();

    assert_eq!(scan.io_errors, 0);
    assert_eq!(scan.blocks.keys().collect::<Vec<_>>(), vec!["b0", "b1"]);

    let b0 = &scan.blocks["b0"];
    assert_eq!(b0.len(), 2);
    assert_eq!(b0[0].as_ref().map(|r| r.transaction_id()), Some("0-aa"));
    assert_eq!(b0[1].as_ref().map(|r| r.total_gas()), Some(0));

    // "broken" has no line terminator: "broke" after stripping, no gas lines
    assert_eq!(scan.blocks["b1"], vec![None]);
}

#[test]
fn test_json_report_written() {
    let chain = tempfile::tempdir().unwrap();
    write_response(chain.path(), "b0", "t0", SOME_RESPONSE);
    let out = tempfile::tempdir().unwrap();
    let report_path = out.path().join("reports/stats.json");

    let stats = execute_scan(ScanArgs {
        root: chain.path().to_path_buf(),
        min_block: Some(0),
        output_json: Some(report_path.clone()),
        ..Default::default()
    })
    .unwrap();

    let report: StatsReport =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report.min_block, Some(0));
    assert_eq!(report.stats, stats);
}

#[test]
fn test_sorting_does_not_change_stats() {
    let chain = tempfile::tempdir().unwrap();
    for block in ["b2", "b10", "b1"] {
        write_response(chain.path(), block, "t0", SOME_RESPONSE);
        write_response(chain.path(), block, "t1", "broken\n");
    }

    let unsorted = execute_scan(ScanArgs {
        root: chain.path().to_path_buf(),
        min_block: Some(2),
        ..Default::default()
    })
    .unwrap();
    let sorted = execute_scan(ScanArgs {
        root: chain.path().to_path_buf(),
        min_block: Some(2),
        sorted: true,
        ..Default::default()
    })
    .unwrap();

    assert_eq!(sorted, unsorted);
    assert_eq!(sorted.blocks, 2);
    assert_eq!(sorted.transaction_errors, 2);

    // aggregation keys blocks by id, so the map order is lexicographic
    let scan = collect_responses(chain.path(), true).unwrap();
    assert_eq!(scan.blocks.keys().collect::<Vec<_>>(), vec!["b1", "b10", "b2"]);
}

#[test]
fn test_missing_root_is_fatal() {
    let chain = tempfile::tempdir().unwrap();
    assert!(collect_responses(&chain.path().join("missing"), false).is_err());
}
