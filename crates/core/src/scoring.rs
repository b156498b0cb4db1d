//! Scoring module - line-clear points and the gravity schedule
//!
//! Scores come from a fixed lookup per lock: 1/2/3/4 simultaneous lines award
//! 100/300/500/800 points. Counts outside the table (impossible with 4-cell
//! pieces on a standard board) award nothing.

use crate::types::{
    BASE_DROP_MS, DROP_DECREMENT_MS, DROP_FLOOR_MS, LINE_SCORES, SPEEDUP_SCORE_STEP,
};

/// Points for clearing `lines` rows in a single lock.
pub fn line_clear_score(lines: usize) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines]
}

/// Milliseconds per gravity step at the given score.
///
/// Starts at [`BASE_DROP_MS`] and loses [`DROP_DECREMENT_MS`] for every
/// [`SPEEDUP_SCORE_STEP`] points, clamped at [`DROP_FLOOR_MS`]. Monotonically
/// non-increasing in score.
pub fn drop_interval_ms(score: u32) -> u32 {
    let steps = score / SPEEDUP_SCORE_STEP;
    BASE_DROP_MS
        .saturating_sub(DROP_DECREMENT_MS.saturating_mul(steps))
        .max(DROP_FLOOR_MS)
}
