//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Conventional trace filename written by the collector
pub const DEFAULT_TRACE_FILE: &str = "gc_trace.txt";

// Unit conversion for display
// Reports use decimal megabytes (SI), not binary mebibytes
pub const BYTES_PER_MEGABYTE: f64 = 1_000_000.0;

/// Event-type prefix that marks a line as a collection pause
pub const PAUSE_EVENT_PREFIX: &str = "pause";

// Field names on pause lines (heap size sampled around the pause)
pub const TOTAL_SIZE_BEFORE: &str = "total_size_before";
pub const TOTAL_SIZE_AFTER: &str = "total_size_after";
