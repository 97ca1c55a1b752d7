//! Aggregation of pause events into totals and statistics.
//!
//! This module transforms parsed pause events into:
//! - The net reclaimed-memory total (the report's headline number)
//! - Pause distribution statistics for the extended summary

pub mod metrics;

// Re-export main types and functions
pub use metrics::{calculate_pause_stats, total_reclaimed, PauseStats};
