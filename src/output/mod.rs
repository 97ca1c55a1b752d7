//! Output writers for report data.
//!
//! This module handles the report surfaces:
//! - The one-line stdout report and extended text summary
//! - JSON report files

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, write_report};
pub use text::{format_megabytes, generate_text_summary, memory_used_line};
