//! Main parser for GC trace logs.
//!
//! Parses raw line-oriented trace text into structured pause events.
//! Handles line classification, tokenization, and field extraction.

use super::schema::{PauseSummary, Report};
use crate::aggregator::metrics::PauseStats;
use crate::utils::config::{
    BYTES_PER_MEGABYTE, PAUSE_EVENT_PREFIX, SCHEMA_VERSION, TOTAL_SIZE_AFTER, TOTAL_SIZE_BEFORE,
};
use crate::utils::error::ParseError;
use log::debug;
use std::collections::HashMap;
use std::path::Path;

/// A single collection pause extracted from the trace
///
/// Carries the heap size sampled immediately before and after the pause,
/// both in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseEvent {
    /// Heap size before the pause (bytes)
    pub total_size_before: i64,

    /// Heap size after the pause (bytes)
    pub total_size_after: i64,
}

impl PauseEvent {
    /// Memory reclaimed by this pause (bytes)
    ///
    /// Negative when the pause grew the heap, e.g. allocation during
    /// collection or measurement noise.
    pub fn delta(&self) -> i64 {
        self.total_size_before - self.total_size_after
    }
}

/// Parsed trace data (internal representation)
#[derive(Debug, Clone)]
pub struct ParsedTrace {
    /// Pause events in input order
    pub pause_events: Vec<PauseEvent>,

    /// Total lines seen in the input
    pub total_lines: usize,

    /// Lines that did not qualify as pause events
    pub skipped_lines: usize,
}

/// Parse raw trace text into pause events
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `input` - Full trace text, one event per line
///
/// # Returns
/// Parsed trace data ready for aggregation
///
/// # Errors
/// * `ParseError::MalformedToken` - field token without an `=` separator
/// * `ParseError::MissingField` - pause line lacking a required size field
/// * `ParseError::NonIntegerField` - size field that is not a base-10 integer
pub fn parse_trace(input: &str) -> Result<ParsedTrace, ParseError> {
    let mut pause_events = Vec::new();
    let mut total_lines = 0;
    let mut skipped_lines = 0;

    for (index, line) in input.lines().enumerate() {
        total_lines += 1;

        match parse_pause_line(line, index + 1)? {
            Some(event) => pause_events.push(event),
            None => skipped_lines += 1,
        }
    }

    debug!(
        "Parsed {} pause events ({} of {} lines skipped)",
        pause_events.len(),
        skipped_lines,
        total_lines
    );

    Ok(ParsedTrace {
        pause_events,
        total_lines,
        skipped_lines,
    })
}

/// Parse a single trace line
///
/// **Public** - exposed for targeted testing of line semantics
///
/// Returns `Ok(None)` for lines that are not pause events. A line
/// qualifies iff its first five characters are the literal `pause`;
/// anything else (including shorter lines) is skipped without effect.
///
/// # Arguments
/// * `line` - The raw line, line terminator already removed
/// * `line_no` - 1-based line number, used in error diagnostics
pub fn parse_pause_line(line: &str, line_no: usize) -> Result<Option<PauseEvent>, ParseError> {
    if !line.starts_with(PAUSE_EVENT_PREFIX) {
        return Ok(None);
    }

    let fields = extract_fields(line, line_no)?;

    let total_size_before = require_size_field(&fields, TOTAL_SIZE_BEFORE, line_no)?;
    let total_size_after = require_size_field(&fields, TOTAL_SIZE_AFTER, line_no)?;

    Ok(Some(PauseEvent {
        total_size_before,
        total_size_after,
    }))
}

/// Tokenize a qualifying line into a key -> value mapping
///
/// **Private** - internal helper for parse_pause_line
///
/// Trailing whitespace is stripped before splitting; the collector leaves
/// a trailing space on every line, which would otherwise produce an empty
/// final token. The first token is the event type and carries no field.
/// Duplicate keys keep the last occurrence.
fn extract_fields<'a>(
    line: &'a str,
    line_no: usize,
) -> Result<HashMap<&'a str, &'a str>, ParseError> {
    let mut fields = HashMap::new();

    let mut tokens = line.trim_end().split(' ');

    // Event-type token
    tokens.next();

    for token in tokens {
        // Split at the first '='; the value keeps any further '=' verbatim
        let (key, value) = token.split_once('=').ok_or_else(|| ParseError::MalformedToken {
            line: line_no,
            token: token.to_string(),
        })?;

        fields.insert(key, value);
    }

    Ok(fields)
}

/// Look up a mandatory size field and parse it as a base-10 integer
///
/// **Private** - internal helper for parse_pause_line
fn require_size_field(
    fields: &HashMap<&str, &str>,
    field: &str,
    line_no: usize,
) -> Result<i64, ParseError> {
    let value = fields.get(field).ok_or_else(|| ParseError::MissingField {
        line: line_no,
        field: field.to_string(),
    })?;

    value.parse::<i64>().map_err(|_| ParseError::NonIntegerField {
        line: line_no,
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Convert parsed trace data to the output report format
///
/// **Public** - used by commands to create final output
pub fn to_report(trace_file: &Path, parsed: &ParsedTrace, stats: &PauseStats) -> Report {
    use chrono::Utc;

    Report {
        version: SCHEMA_VERSION.to_string(),
        trace_file: trace_file.display().to_string(),
        reclaimed_bytes: stats.total_reclaimed_bytes,
        reclaimed_megabytes: stats.total_reclaimed_bytes as f64 / BYTES_PER_MEGABYTE,
        pause_summary: PauseSummary {
            pause_count: stats.pause_count as u64,
            grew_count: stats.grew_count as u64,
            largest_reclaimed_bytes: stats.largest_reclaimed,
            mean_reclaimed_bytes: stats.mean_reclaimed,
        },
        generated_at: Utc::now().to_rfc3339(),
    }
}
