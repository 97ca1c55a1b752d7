//! GC Trace Tools CLI
//!
//! A memory reporting tool for garbage-collection trace logs.
//! Sums the memory reclaimed across recorded pauses and reports
//! the total in megabytes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use gc_trace_tools::commands::{execute_report, validate_args, ReportArgs};
use gc_trace_tools::utils::config::{DEFAULT_TRACE_FILE, SCHEMA_VERSION};

/// GC Trace Tools - Memory reporting for GC trace logs
#[derive(Parser, Debug)]
#[command(name = "gc-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Sum reclaimed memory across recorded pauses and print the report
    Report {
        /// Path to the GC trace file
        #[arg(short, long, env = "GC_TRACE_FILE", default_value = DEFAULT_TRACE_FILE)]
        input: PathBuf,

        /// Output path for JSON report (optional)
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Print extended pause summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate that a trace file parses cleanly
    Validate {
        /// Path to trace file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display report schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            input,
            json,
            summary,
        } => {
            let args = ReportArgs {
                input,
                output_json: json,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute report
            execute_report(args)?;
        }

        Commands::Validate { file } => {
            validate_trace_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Validate a trace file
///
/// **Private** - internal command implementation
fn validate_trace_file(file_path: PathBuf) -> Result<()> {
    use gc_trace_tools::aggregator::calculate_pause_stats;
    use gc_trace_tools::parser::parse_trace;

    println!("Validating trace: {}", file_path.display());

    let raw_trace = std::fs::read_to_string(&file_path)
        .with_context(|| format!("Failed to read trace file: {}", file_path.display()))?;

    let parsed = parse_trace(&raw_trace)
        .with_context(|| format!("Failed to parse trace file: {}", file_path.display()))?;

    let stats = calculate_pause_stats(&parsed.pause_events);

    println!("✓ Valid trace");
    println!("  Lines: {}", parsed.total_lines);
    println!("  Pause events: {}", stats.pause_count);
    println!("  Skipped lines: {}", parsed.skipped_lines);
    println!("  Reclaimed: {} bytes", stats.total_reclaimed_bytes);

    Ok(())
}

/// Display schema information
///
/// **Private** - internal command implementation
fn display_schema(show_details: bool) {
    println!("GC Trace Tools Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string             - Schema version (e.g., '1.0.0')");
        println!("  trace_file: string          - Source trace file");
        println!("  reclaimed_bytes: number     - Net memory reclaimed (bytes)");
        println!("  reclaimed_megabytes: number - Net memory reclaimed (decimal MB)");
        println!("  pause_summary: object       - Pause statistics");
        println!("    pause_count: number       - Recorded pauses");
        println!("    grew_count: number        - Pauses with negative delta");
        println!("    largest_reclaimed_bytes: number - Largest single-pause reclaim");
        println!("    mean_reclaimed_bytes: number    - Mean reclaim per pause");
        println!("  generated_at: string        - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("GC Trace Tools v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("A memory reporting tool for garbage-collection trace logs.");
}
