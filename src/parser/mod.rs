//! Trace parsing and schema definitions.
//!
//! This module handles:
//! - Classifying trace lines (pause events vs everything else)
//! - Tokenizing `key=value` fields
//! - Defining the output report schema

pub mod schema;
pub mod trace;

// Re-export main types
pub use schema::{PauseSummary, Report};
pub use trace::{parse_pause_line, parse_trace, to_report, ParsedTrace, PauseEvent};
