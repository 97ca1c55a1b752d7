//! Output JSON schema definitions for report data.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Trace file the report was generated from
    pub trace_file: String,

    /// Net memory reclaimed across all pauses (bytes)
    pub reclaimed_bytes: i64,

    /// Net memory reclaimed in decimal megabytes
    pub reclaimed_megabytes: f64,

    /// Summary statistics over the recorded pauses
    pub pause_summary: PauseSummary,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// Summary statistics for pause events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PauseSummary {
    /// Number of recorded pauses
    pub pause_count: u64,

    /// Pauses that grew the heap (negative delta)
    pub grew_count: u64,

    /// Largest single-pause reclaim (bytes)
    pub largest_reclaimed_bytes: i64,

    /// Mean reclaim per pause (bytes)
    pub mean_reclaimed_bytes: i64,
}
