//! Scoring and pacing helpers
//!
//! The scoring rule is fixed: every resolution pass is worth
//! `cells x 10 x (chain_index + 1)`, so successive cascades within one
//! settlement sequence are worth proportionally more.

use crate::types::{CELL_SCORE, FALL_INTERVALS, FALL_INTERVAL_FLOOR_MS, LOCKS_PER_LEVEL};

/// Points for one resolution pass.
/// `cleared` counts all simultaneous groups combined, not per group.
pub fn pass_score(cleared: u32, chain_index: u32) -> u32 {
    cleared
        .saturating_mul(CELL_SCORE)
        .saturating_mul(chain_index + 1)
}

/// Difficulty level derived from session progress
pub fn level_for(pieces_locked: u32) -> u32 {
    pieces_locked / LOCKS_PER_LEVEL
}

/// Fall cadence for a level (milliseconds per row).
/// The cadence driver is the caller's; this table only advises it. Always
/// positive, clamped to the floor past the end of the table.
pub fn fall_interval_ms(level: u32) -> u32 {
    match FALL_INTERVALS.get(level as usize) {
        Some(&interval) => interval,
        None => FALL_INTERVAL_FLOOR_MS,
    }
}
