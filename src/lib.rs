//! GC Trace Tools
//!
//! Pause-event analysis and memory reporting for
//! garbage-collection trace logs.
//!
//! This crate provides the core implementation for the
//! `gc-trace` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install gc-trace-tools
//! gc-trace --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
