//! Reduce pause events into the reclaimed-memory total and summary stats.
//!
//! The total is the single number the report is built around; the stats
//! exist for logging and the extended summary output.

use crate::parser::trace::PauseEvent;
use log::debug;

/// Sum the reclaimed memory across all pauses
///
/// **Public** - the core reduction
///
/// # Arguments
/// * `events` - Pause events in input order
///
/// # Returns
/// Net bytes reclaimed. Negative when the recorded pauses grew the heap
/// overall. Pure: the same input always produces the same total.
pub fn total_reclaimed(events: &[PauseEvent]) -> i64 {
    events.iter().map(PauseEvent::delta).sum()
}

/// Calculate pause distribution statistics
///
/// **Public** - provides summary statistics
///
/// # Arguments
/// * `events` - Pause events in input order
///
/// # Returns
/// Statistics about the pause deltas
pub fn calculate_pause_stats(events: &[PauseEvent]) -> PauseStats {
    if events.is_empty() {
        return PauseStats::default();
    }

    let count = events.len();
    let total = total_reclaimed(events);
    let mean = total / count as i64;

    let largest = events.iter().map(PauseEvent::delta).max().unwrap_or(0);
    let smallest = events.iter().map(PauseEvent::delta).min().unwrap_or(0);
    let grew_count = events.iter().filter(|e| e.delta() < 0).count();

    debug!("Calculated stats over {} pauses", count);

    PauseStats {
        pause_count: count,
        total_reclaimed_bytes: total,
        largest_reclaimed: largest,
        smallest_reclaimed: smallest,
        mean_reclaimed: mean,
        grew_count,
    }
}

/// Pause distribution statistics
///
/// **Public** - returned from calculate_pause_stats
#[derive(Debug, Clone, Default)]
pub struct PauseStats {
    /// Number of recorded pauses
    pub pause_count: usize,

    /// Net bytes reclaimed across all pauses
    pub total_reclaimed_bytes: i64,

    /// Largest single-pause reclaim (bytes)
    pub largest_reclaimed: i64,

    /// Smallest single-pause reclaim (bytes, negative if a pause grew the heap)
    pub smallest_reclaimed: i64,

    /// Mean reclaim per pause (bytes)
    pub mean_reclaimed: i64,

    /// Pauses with a negative delta
    pub grew_count: usize,
}

impl PauseStats {
    /// Check whether the trace shows net heap growth
    ///
    /// **Public** - useful for flagging suspicious traces
    pub fn net_growth(&self) -> bool {
        self.total_reclaimed_bytes < 0
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Pauses: {} | Reclaimed: {} bytes | Largest: {} | Mean: {} | Grew: {}",
            self.pause_count,
            self.total_reclaimed_bytes,
            self.largest_reclaimed,
            self.mean_reclaimed,
            self.grew_count
        )
    }
}
