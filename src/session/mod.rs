//! Quiz session core.
//!
//! Owns topic selection, the shuffled no-repeat question pass,
//! scoring, answer history, and the leaderboard. Free of any I/O or
//! rendering; the terminal host drives it.

mod leaderboard;
mod quiz;
mod shuffle;

pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use quiz::{AnswerRecord, QuizSession, SessionError};
pub use shuffle::shuffle;
