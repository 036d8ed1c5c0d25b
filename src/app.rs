use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::{AppState, QuestionBank};
use crate::session::{Leaderboard, QuizSession};
use crate::sink::AnswerSink;

const NUM_OPTIONS: usize = 4;

/// Host-side application state: one quiz session, the shared
/// leaderboard, the answer sink, and the view bookkeeping.
pub struct App {
    pub state: AppState,
    bank: QuestionBank,
    session: QuizSession,
    leaderboard: Leaderboard,
    sink: Box<dyn AnswerSink>,
    user: String,
    rng: StdRng,
    topic_cursor: usize,
    selected_option: usize,
    result_scroll: usize,
    warning: Option<String>,
}

impl App {
    pub fn new(bank: QuestionBank, sink: Box<dyn AnswerSink>, user: String) -> Self {
        Self::with_rng(bank, sink, user, StdRng::from_os_rng())
    }

    /// Like [`new`](Self::new) but with a caller-supplied RNG, so the
    /// shuffle is deterministic in tests.
    pub fn with_rng(bank: QuestionBank, sink: Box<dyn AnswerSink>, user: String, rng: StdRng) -> Self {
        Self {
            state: AppState::Topics,
            bank,
            session: QuizSession::new(),
            leaderboard: Leaderboard::new(),
            sink,
            user,
            rng,
            topic_cursor: 0,
            selected_option: 0,
            result_scroll: 0,
            warning: None,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Non-fatal warning to surface in the UI, e.g. a failed log write.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn topic_names(&self) -> Vec<&str> {
        self.bank.topics().collect()
    }

    pub fn topic_cursor(&self) -> usize {
        self.topic_cursor
    }

    pub fn select_next_topic(&mut self) {
        let count = self.bank.topic_count();
        self.topic_cursor = (self.topic_cursor + 1) % count;
    }

    pub fn select_previous_topic(&mut self) {
        let count = self.bank.topic_count();
        self.topic_cursor = (self.topic_cursor + count - 1) % count;
    }

    /// Start a pass over the topic under the cursor.
    pub fn choose_topic(&mut self) {
        let Some(topic) = self.topic_names().get(self.topic_cursor).copied() else {
            return;
        };
        let topic = topic.to_string();
        match self.session.select_topic(&self.bank, &topic, &mut self.rng) {
            Ok(()) => {
                self.state = AppState::Quiz;
                self.selected_option = 0;
                self.result_scroll = 0;
                self.warning = None;
            }
            Err(e) => self.warning = Some(e.to_string()),
        }
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn select_next_option(&mut self) {
        if !self.session.awaiting_advance() {
            self.selected_option = (self.selected_option + 1) % NUM_OPTIONS;
        }
    }

    pub fn select_previous_option(&mut self) {
        if !self.session.awaiting_advance() {
            self.selected_option = (self.selected_option + NUM_OPTIONS - 1) % NUM_OPTIONS;
        }
    }

    pub fn awaiting_advance(&self) -> bool {
        self.session.awaiting_advance()
    }

    /// Submit the highlighted option for the current question.
    ///
    /// The in-memory outcome is authoritative: a failed sink append is
    /// surfaced as a warning and never rolls back the score or
    /// history.
    pub fn submit_answer(&mut self) {
        let Some(choice) = self
            .session
            .current_question()
            .map(|q| q.options[self.selected_option].clone())
        else {
            return;
        };

        match self.session.submit_answer(&choice) {
            Ok(record) => {
                self.warning = None;
                self.leaderboard.upsert(&self.user, self.session.score());
                let topic = self.session.selected_topic().unwrap_or_default().to_string();
                if let Err(e) = self.sink.append(&self.user, &topic, &record) {
                    self.warning = Some(format!("answer not logged: {}", e));
                }
            }
            Err(e) => self.warning = Some(e.to_string()),
        }
    }

    /// Move to the next question, or to the results view at the end of
    /// the pass.
    pub fn advance(&mut self) {
        match self.session.advance() {
            Ok(()) => {
                self.selected_option = 0;
                if self.session.is_exhausted() {
                    self.state = AppState::Result;
                }
            }
            Err(e) => self.warning = Some(e.to_string()),
        }
    }

    /// Back to topic selection. Clears the session's topic so choosing
    /// the same topic again starts a freshly shuffled pass.
    pub fn restart(&mut self) {
        self.session.reset();
        self.state = AppState::Topics;
        self.selected_option = 0;
        self.result_scroll = 0;
        self.warning = None;
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.session.history().len().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::models::Question;
    use crate::sink::MemorySink;

    use super::*;

    fn bank() -> QuestionBank {
        let question = |n: usize| Question {
            text: format!("Question {}", n),
            options: [
                "A. First".to_string(),
                "B. Second".to_string(),
                "C. Third".to_string(),
                "D. Fourth".to_string(),
            ],
            answer: "A. First".to_string(),
            feedback: "Because.".to_string(),
        };
        let mut topics = BTreeMap::new();
        topics.insert("PNH".to_string(), (0..2).map(question).collect());
        QuestionBank::new(topics)
    }

    fn app() -> App {
        App::with_rng(
            bank(),
            Box::new(MemorySink::new()),
            "Alice".to_string(),
            StdRng::seed_from_u64(5),
        )
    }

    #[test]
    fn full_pass_reaches_results() {
        let mut app = app();
        assert_eq!(app.state, AppState::Topics);

        app.choose_topic();
        assert_eq!(app.state, AppState::Quiz);

        for _ in 0..2 {
            app.submit_answer();
            assert!(app.awaiting_advance());
            app.advance();
        }
        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.session().question_count(), 2);
    }

    #[test]
    fn submitting_scores_and_updates_leaderboard() {
        let mut app = app();
        app.choose_topic();

        // Option A is always correct in the fixture.
        app.submit_answer();
        assert_eq!(app.session().score(), 1);
        let top = app.leaderboard().top_n(1);
        assert_eq!(top[0].name, "Alice");
        assert_eq!(top[0].score, 1);
    }

    #[test]
    fn option_cursor_is_frozen_while_feedback_is_shown() {
        let mut app = app();
        app.choose_topic();
        app.submit_answer();

        app.select_next_option();
        assert_eq!(app.selected_option(), 0);
    }

    #[test]
    fn restart_allows_replaying_the_same_topic() {
        let mut app = app();
        app.choose_topic();
        app.submit_answer();
        app.advance();

        app.restart();
        assert_eq!(app.state, AppState::Topics);
        app.choose_topic();
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.session().question_count(), 0);
    }
}
