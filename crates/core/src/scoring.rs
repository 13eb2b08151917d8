//! Scoring module - classic line scores, level derivation, speed curve
//!
//! Scoring follows the classic table (40/100/300/1000 base points for 1-4
//! rows in a batch, times `level + 1`). The batch score is applied once per
//! sweep pass, not once per cleared row.
//!
//! The fall-interval curve is expressed in 60Hz frames converted to
//! milliseconds with truncating integer math, including the fixed 66ms
//! plateau across levels 10-18.

use quadris_types::LINE_SCORES;

/// Points for clearing `rows` full rows in one batch at the given level.
///
/// Returns 0 for an empty batch or a batch larger than 4.
pub fn line_clear_score(rows: usize, level: u32) -> u32 {
    if rows == 0 || rows > 4 {
        return 0;
    }
    LINE_SCORES[rows] * (level + 1)
}

/// Level derived from the total cleared-line count.
///
/// Always `cleared_lines / 10` (integer division).
pub fn level_for_lines(cleared_lines: u32) -> u32 {
    cleared_lines / 10
}

/// Milliseconds per automatic descent step at the given level.
///
/// | Level | Interval |
/// |-------|----------|
/// | 0..=8 | (48 - 5·level) frames (800ms down to 133ms) |
/// | 9 | 100ms |
/// | 10..=18 | 66ms plateau |
/// | 19..=28 | 33ms |
/// | 29+ | 16ms |
pub fn fall_interval_ms(level: u32) -> u32 {
    let frames = match level {
        0..=8 => 48 - 5 * level,
        9 => 6,
        10..=18 => 4,
        19..=28 => 2,
        _ => 1,
    };
    frames * 1000 / 60
}
