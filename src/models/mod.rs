mod bank;
mod question;

pub use bank::QuestionBank;
pub use question::Question;

/// Which view the terminal host is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Topic selection list.
    Topics,
    /// Answering questions (includes the post-answer feedback panel).
    Quiz,
    /// End-of-pass results and leaderboard.
    Result,
}
