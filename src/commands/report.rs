//! Report command implementation.
//!
//! The report command:
//! 1. Reads the trace file
//! 2. Parses pause events
//! 3. Aggregates reclaimed memory
//! 4. Prints the report (and optionally writes JSON)

use crate::aggregator::{calculate_pause_stats, total_reclaimed};
use crate::output::{generate_text_summary, memory_used_line, write_report};
use crate::parser::{parse_trace, to_report};
use crate::utils::config::DEFAULT_TRACE_FILE;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Path to the GC trace file
    pub input: PathBuf,

    /// Output path for JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print extended text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_TRACE_FILE),
            output_json: None,
            print_summary: false,
        }
    }
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Report command arguments
///
/// # Returns
/// Ok if the report was produced, Err with context if any step fails
///
/// # Errors
/// * Unreadable trace file
/// * Trace parsing errors (malformed token, missing or non-integer field)
/// * JSON report write errors
pub fn execute_report(args: ReportArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Generating report for trace: {}", args.input.display());

    // Step 1/4: Read trace file
    info!("Step 1/4: Reading trace file...");
    let raw_trace = read_trace(&args.input)?;

    // Step 2/4: Parse pause events
    info!("Step 2/4: Parsing pause events...");
    let parsed = parse_trace(&raw_trace)
        .with_context(|| format!("Failed to parse trace file: {}", args.input.display()))?;

    debug!(
        "Parsed trace: {} pause events, {} lines total",
        parsed.pause_events.len(),
        parsed.total_lines
    );

    // Step 3/4: Aggregate
    info!("Step 3/4: Aggregating reclaimed memory...");
    let reclaimed = total_reclaimed(&parsed.pause_events);
    let stats = calculate_pause_stats(&parsed.pause_events);

    info!("Pause stats: {}", stats.summary());

    // Step 4/4: Report
    info!("Step 4/4: Writing report...");
    println!("{}", memory_used_line(reclaimed));

    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("PAUSE SUMMARY");
        println!("{}", "=".repeat(60));
        println!("{}", generate_text_summary(&stats));
        println!("{}", "=".repeat(60));
    }

    if let Some(json_path) = &args.output_json {
        let report = to_report(&args.input, &parsed, &stats);
        write_report(&report, json_path)
            .with_context(|| format!("Failed to write report JSON: {}", json_path.display()))?;

        info!("✓ Report written to: {}", json_path.display());
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Read the trace file into memory
///
/// **Private** - internal helper for execute_report
fn read_trace(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read trace file: {}", path.display()))
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.input.is_dir() {
        anyhow::bail!("Input path is a directory: {}", args.input.display());
    }

    if let Some(json_path) = &args.output_json {
        if json_path.as_os_str().is_empty() {
            anyhow::bail!("JSON output path cannot be empty");
        }
    }

    Ok(())
}

/// Quick report with defaults (convenience function)
///
/// **Public** - simplified API for the common use case
///
/// # Arguments
/// * `input` - Path to the trace file
///
/// # Returns
/// Net bytes reclaimed across all recorded pauses
pub fn quick_report(input: impl AsRef<Path>) -> Result<i64> {
    let input = input.as_ref();

    let raw_trace = read_trace(input)?;
    let parsed = parse_trace(&raw_trace)
        .with_context(|| format!("Failed to parse trace file: {}", input.display()))?;

    Ok(total_reclaimed(&parsed.pause_events))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_valid() {
        let args = ReportArgs {
            input: PathBuf::from("gc_trace.txt"),
            ..Default::default()
        };

        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_empty_input() {
        let args = ReportArgs {
            input: PathBuf::new(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_directory_input() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = ReportArgs {
            input: temp_dir.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_json_path() {
        let args = ReportArgs {
            input: PathBuf::from("gc_trace.txt"),
            output_json: Some(PathBuf::new()),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_default_args_use_conventional_filename() {
        let args = ReportArgs::default();
        assert_eq!(args.input, PathBuf::from("gc_trace.txt"));
        assert!(args.output_json.is_none());
        assert!(!args.print_summary);
    }
}
