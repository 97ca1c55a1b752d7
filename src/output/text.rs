//! Human-readable report formatting.
//!
//! The one-line `Memory used:` report plus the extended text summary
//! shown behind `--summary`.

use crate::aggregator::PauseStats;
use crate::utils::config::BYTES_PER_MEGABYTE;

/// Format a byte count as decimal megabytes
///
/// **Public** - display conversion used by all report surfaces
///
/// Division is real-valued. Values are printed with up to six decimal
/// places (byte resolution at the megabyte scale) with trailing zeros
/// trimmed, keeping at least one decimal place: `600000` -> `0.6`,
/// `0` -> `0.0`, `123456` -> `0.123456`.
pub fn format_megabytes(bytes: i64) -> String {
    let megabytes = bytes as f64 / BYTES_PER_MEGABYTE;
    let fixed = format!("{megabytes:.6}");

    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

/// Build the final report line
///
/// **Public** - the line the report command prints to stdout
pub fn memory_used_line(bytes: i64) -> String {
    format!("Memory used: {} MB", format_megabytes(bytes))
}

/// Generate extended text summary of pause statistics
///
/// **Public** - printed by the report command when --summary is set
pub fn generate_text_summary(stats: &PauseStats) -> String {
    let mut lines = Vec::new();

    lines.push(format!("{:<22} {}", "Pauses recorded:", stats.pause_count));
    lines.push(format!(
        "{:<22} {} MB ({} bytes)",
        "Memory reclaimed:",
        format_megabytes(stats.total_reclaimed_bytes),
        stats.total_reclaimed_bytes
    ));
    lines.push(format!(
        "{:<22} {} bytes",
        "Largest pause reclaim:", stats.largest_reclaimed
    ));
    lines.push(format!(
        "{:<22} {} bytes",
        "Mean pause reclaim:", stats.mean_reclaimed
    ));
    lines.push(format!(
        "{:<22} {}",
        "Heap-growing pauses:", stats.grew_count
    ));

    if stats.net_growth() {
        lines.push(String::new());
        lines.push("Warning: net heap growth across recorded pauses".to_string());
    }

    lines.join("\n")
}
