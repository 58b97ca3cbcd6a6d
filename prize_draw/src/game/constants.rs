//! Game-wide constants.

/// Maximum number of participants in a single game.
pub const MAX_PARTICIPANTS: usize = 15;

/// Number of prizes available at game start (and after a reset).
pub const TOTAL_PRIZES: u32 = 15;

/// Delay between a draw request and the winner selection, in milliseconds.
pub const DRAW_DELAY_MS: u64 = 2000;
