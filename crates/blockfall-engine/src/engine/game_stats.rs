use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Points for a simultaneous clear, indexed by row count and multiplied by
/// the level at the time of the clear.
///
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
const SCORE_TABLE: [usize; 5] = [0, 40, 100, 300, 1200];

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: usize = 10;

/// Tick interval at level 1.
pub const INITIAL_TICK_INTERVAL: Duration = Duration::from_millis(500);
/// Floor reached at level 10 and above.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(50);
const TICK_INTERVAL_STEP_MILLIS: u64 = 50;

/// Returns the base score for clearing `cleared_lines` rows at once.
///
/// Anything outside 1..=4 scores nothing.
#[must_use]
pub fn line_score(cleared_lines: usize) -> usize {
    SCORE_TABLE.get(cleared_lines).copied().unwrap_or(0)
}

/// Returns the level reached after clearing `total_lines` in total.
#[must_use]
pub const fn level_for_lines(total_lines: usize) -> usize {
    total_lines / LINES_PER_LEVEL + 1
}

/// Returns the gravity interval for `level`: 500ms at level 1, 50ms faster
/// per level, never below 50ms.
///
/// ```
/// use std::time::Duration;
/// use blockfall_engine::tick_interval_for_level;
///
/// assert_eq!(tick_interval_for_level(1), Duration::from_millis(500));
/// assert_eq!(tick_interval_for_level(4), Duration::from_millis(350));
/// assert_eq!(tick_interval_for_level(30), Duration::from_millis(50));
/// ```
#[must_use]
pub fn tick_interval_for_level(level: usize) -> Duration {
    let steps = u64::try_from(level.saturating_sub(1)).unwrap_or(u64::MAX);
    let speedup = Duration::from_millis(steps.saturating_mul(TICK_INTERVAL_STEP_MILLIS));
    INITIAL_TICK_INTERVAL
        .saturating_sub(speedup)
        .max(MIN_TICK_INTERVAL)
}

/// Session counters: score, lines, level and a few extra statistics.
///
/// The level is always derived from the line total rather than stepped, so
/// it stays consistent however many rows one lock clears.
///
/// # Example
///
/// ```
/// use blockfall_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.complete_piece_drop(4);
///
/// assert_eq!(stats.score(), 1200);
/// assert_eq!(stats.cleared_lines(), 4);
/// assert_eq!(stats.level(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    score: usize,
    cleared_lines: usize,
    completed_pieces: usize,
    line_cleared_counter: [usize; 5],
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            cleared_lines: 0,
            completed_pieces: 0,
            line_cleared_counter: [0; 5],
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn level(&self) -> usize {
        level_for_lines(self.cleared_lines)
    }

    #[must_use]
    pub const fn cleared_lines(&self) -> usize {
        self.cleared_lines
    }

    /// Returns the total number of pieces locked into the board.
    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    /// Returns a histogram of locks by rows cleared.
    ///
    /// Index 0 counts locks that cleared nothing, indices 1-4 count singles
    /// through tetrises.
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    /// Updates the counters for one locked piece.
    ///
    /// The clear is scored at the level in effect before the new lines are
    /// added.
    pub fn complete_piece_drop(&mut self, cleared_lines: usize) {
        self.score += line_score(cleared_lines) * self.level();
        self.cleared_lines += cleared_lines;
        self.completed_pieces += 1;
        if let Some(count) = self.line_cleared_counter.get_mut(cleared_lines) {
            *count += 1;
        }
    }
}
