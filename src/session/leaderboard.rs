/// Entry in the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: usize,
}

/// Shared score board keyed by user name.
///
/// `upsert` replaces an existing score outright rather than adding to
/// it. If sessions for several users run in one process, wrap the
/// board in a mutex; the board itself assumes a single writer per
/// call.
#[derive(Debug, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a score, or replace the existing one for the same name.
    pub fn upsert(&mut self, name: &str, score: usize) {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.score = score,
            None => self.entries.push(LeaderboardEntry {
                name: name.to_string(),
                score,
            }),
        }
    }

    /// Top `n` entries, score descending. Ties break by name ascending
    /// so the ordering is deterministic.
    pub fn top_n(&self, n: usize) -> Vec<LeaderboardEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        sorted.truncate(n);
        sorted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_replaces_rather_than_adds() {
        let mut board = Leaderboard::new();
        board.upsert("Alice", 5);
        board.upsert("Alice", 3);

        assert_eq!(board.len(), 1);
        let top = board.top_n(10);
        assert_eq!(top[0].name, "Alice");
        assert_eq!(top[0].score, 3);
    }

    #[test]
    fn top_n_orders_by_score_then_name() {
        let mut board = Leaderboard::new();
        board.upsert("Carol", 4);
        board.upsert("Alice", 7);
        board.upsert("Bob", 4);

        let top = board.top_n(3);
        assert_eq!(
            top.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["Alice", "Bob", "Carol"]
        );
    }

    #[test]
    fn top_n_truncates() {
        let mut board = Leaderboard::new();
        board.upsert("Alice", 1);
        board.upsert("Bob", 2);
        assert_eq!(board.top_n(1).len(), 1);
        assert_eq!(board.top_n(1)[0].name, "Bob");
    }
}
