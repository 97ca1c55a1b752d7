use gc_trace_tools::commands::{execute_report, quick_report, ReportArgs};
use gc_trace_tools::output::read_report;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_trace(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_quick_report_sums_pauses() {
    let trace = write_trace(
        "pause total_size_before=1000000 total_size_after=400000 \n\
         minor_gc total_size_before=100 total_size_after=50 \n\
         pause total_size_before=500000 total_size_after=200000 \n",
    );

    let reclaimed = quick_report(trace.path()).unwrap();
    assert_eq!(reclaimed, 900000);
}

#[test]
fn test_quick_report_empty_trace() {
    let trace = write_trace("");
    assert_eq!(quick_report(trace.path()).unwrap(), 0);
}

#[test]
fn test_quick_report_missing_file() {
    let err = quick_report("no_such_trace.txt").unwrap_err();
    assert!(err.to_string().contains("Failed to read trace file"));
}

#[test]
fn test_quick_report_propagates_parse_errors() {
    let trace = write_trace("pause total_size_before=abc total_size_after=1 \n");

    let err = quick_report(trace.path()).unwrap_err();
    assert!(format!("{err:#}").contains("non-integer"));
}

#[test]
fn test_execute_report_writes_json() {
    let trace = write_trace(
        "pause total_size_before=300000 total_size_after=0 \n\
         pause total_size_before=100000 total_size_after=200000 \n",
    );

    let temp_dir = tempfile::tempdir().unwrap();
    let json_path = temp_dir.path().join("report.json");

    let args = ReportArgs {
        input: trace.path().to_path_buf(),
        output_json: Some(json_path.clone()),
        print_summary: false,
    };

    execute_report(args).unwrap();

    let report = read_report(&json_path).unwrap();
    assert_eq!(report.reclaimed_bytes, 200000);
    assert_eq!(report.reclaimed_megabytes, 0.2);
    assert_eq!(report.pause_summary.pause_count, 2);
    assert_eq!(report.pause_summary.grew_count, 1);
}

#[test]
fn test_execute_report_fails_on_malformed_trace() {
    let trace = write_trace("pause orphan total_size_before=1 total_size_after=1 \n");

    let args = ReportArgs {
        input: trace.path().to_path_buf(),
        ..Default::default()
    };

    assert!(execute_report(args).is_err());
}
