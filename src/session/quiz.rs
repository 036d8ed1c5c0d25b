//! The quiz session state machine.
//!
//! One `QuizSession` per user: select a topic, walk a freshly shuffled
//! pass over its questions (no repeats until exhausted), submit one
//! answer per question, advance explicitly. Scoring and history are
//! authoritative in memory; persisting the records is the sink's job.

use chrono::{DateTime, Local};
use rand::Rng;
use thiserror::Error;

use crate::models::{Question, QuestionBank};
use crate::session::shuffle::shuffle;

/// Rejected session operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown topic \"{0}\"")]
    InvalidTopic(String),
    #[error("no topic selected")]
    NoTopicSelected,
    #[error("no questions left in this pass")]
    Exhausted,
    #[error("current question already answered; advance first")]
    AlreadyAnswered,
    #[error("no answer pending; nothing to advance past")]
    NothingToAdvance,
}

/// One submitted answer, immutable once created.
#[derive(Debug, Clone)]
pub struct AnswerRecord {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub feedback: String,
    pub is_correct: bool,
    pub timestamp: DateTime<Local>,
}

/// Per-user quiz state. Created empty; topic selection initializes a
/// pass, which runs until the cursor reaches the end of the shuffled
/// order.
#[derive(Debug, Default)]
pub struct QuizSession {
    selected_topic: Option<String>,
    question_order: Vec<Question>,
    cursor: usize,
    score: usize,
    question_count: usize,
    history: Vec<AnswerRecord>,
    awaiting_advance: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a topic and begin a fresh pass over it.
    ///
    /// Re-selecting the topic that is already selected is a no-op;
    /// selecting a different topic draws a fresh uniform permutation of
    /// its questions and resets cursor, score, count, and history. Use
    /// [`reset`](Self::reset) first to force a reshuffle of the same
    /// topic.
    pub fn select_topic<R: Rng>(
        &mut self,
        bank: &QuestionBank,
        topic: &str,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        let questions = bank
            .questions(topic)
            .ok_or_else(|| SessionError::InvalidTopic(topic.to_string()))?;

        if self.selected_topic.as_deref() == Some(topic) {
            return Ok(());
        }

        let mut order = questions.to_vec();
        shuffle(&mut order, rng);

        self.selected_topic = Some(topic.to_string());
        self.question_order = order;
        self.cursor = 0;
        self.score = 0;
        self.question_count = 0;
        self.history.clear();
        self.awaiting_advance = false;
        Ok(())
    }

    /// Clear the topic selection so the next `select_topic` call always
    /// starts a fresh pass, even for the same topic name.
    pub fn reset(&mut self) {
        self.selected_topic = None;
        self.question_order.clear();
        self.cursor = 0;
        self.score = 0;
        self.question_count = 0;
        self.history.clear();
        self.awaiting_advance = false;
    }

    /// The question at the cursor, or `None` once the pass is
    /// exhausted. Exhaustion is a normal outcome, not an error; the
    /// host decides whether to stop or start a new pass.
    pub fn current_question(&self) -> Option<&Question> {
        self.question_order.get(self.cursor)
    }

    pub fn is_exhausted(&self) -> bool {
        self.selected_topic.is_some() && self.cursor >= self.question_order.len()
    }

    /// Score the given choice against the current question.
    ///
    /// The choice is compared byte-for-byte against the correct option.
    /// On success the record is appended to history and an advance
    /// becomes pending; submitting again before advancing is rejected.
    pub fn submit_answer(&mut self, choice: &str) -> Result<AnswerRecord, SessionError> {
        if self.selected_topic.is_none() {
            return Err(SessionError::NoTopicSelected);
        }
        if self.awaiting_advance {
            return Err(SessionError::AlreadyAnswered);
        }
        let question = self
            .question_order
            .get(self.cursor)
            .ok_or(SessionError::Exhausted)?;

        let is_correct = question.is_correct(choice);
        let record = AnswerRecord {
            question: question.text.clone(),
            user_answer: choice.to_string(),
            correct_answer: question.answer.clone(),
            feedback: question.feedback.clone(),
            is_correct,
            timestamp: Local::now(),
        };

        self.question_count += 1;
        if is_correct {
            self.score += 1;
        }
        self.history.push(record.clone());
        self.awaiting_advance = true;
        Ok(record)
    }

    /// Move past an answered question.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        if !self.awaiting_advance {
            return Err(SessionError::NothingToAdvance);
        }
        self.cursor += 1;
        self.awaiting_advance = false;
        Ok(())
    }

    pub fn selected_topic(&self) -> Option<&str> {
        self.selected_topic.as_deref()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    /// Chronological answer history for the current pass.
    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    pub fn awaiting_advance(&self) -> bool {
        self.awaiting_advance
    }

    /// 1-based position of the current question, for display.
    pub fn current_question_number(&self) -> usize {
        (self.cursor + 1).min(self.question_order.len())
    }

    pub fn total_questions(&self) -> usize {
        self.question_order.len()
    }

    /// The most recent record, if any. Present while feedback for the
    /// just-answered question is on screen.
    pub fn last_record(&self) -> Option<&AnswerRecord> {
        self.history.last()
    }
}
