//! # medtrain
//!
//! A terminal-based clinical training quiz: topic selection, a
//! shuffled no-repeat pass over clinician scenario questions, answer
//! feedback, score tracking, a leaderboard, and per-answer CSV
//! logging.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use medtrain::{CsvSink, Trainer, TrainerError};
//!
//! fn main() -> Result<(), TrainerError> {
//!     // Load topics and questions from a JSON file
//!     let sink = Box::new(CsvSink::new("answers_log.csv"));
//!     let trainer = Trainer::from_json("questions.json", sink, "Alice".to_string())?;
//!
//!     // Run the quiz in the terminal
//!     trainer.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
mod session;
mod sink;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::App;
pub use data::{load_bank_from_json, LoadError};
pub use models::{AppState, Question, QuestionBank};
pub use session::{AnswerRecord, Leaderboard, LeaderboardEntry, QuizSession, SessionError};
pub use sink::{AnswerSink, CsvSink, MemorySink, SinkError};

/// Error type for trainer operations.
#[derive(Debug, Error)]
pub enum TrainerError {
    /// Error loading the question bank.
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// IO error during execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A trainer instance that can be run in the terminal.
pub struct Trainer {
    app: App,
}

impl Trainer {
    /// Create a new trainer from a validated question bank.
    pub fn new(bank: QuestionBank, sink: Box<dyn AnswerSink>, user: String) -> Self {
        Self {
            app: App::new(bank, sink, user),
        }
    }

    /// Load a trainer from a JSON question file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file mapping topics to questions.
    /// * `sink` - Destination for answer log records.
    /// * `user` - Name recorded in the log and on the leaderboard.
    pub fn from_json<P: AsRef<Path>>(
        path: P,
        sink: Box<dyn AnswerSink>,
        user: String,
    ) -> Result<Self, TrainerError> {
        let bank = load_bank_from_json(path)?;
        Ok(Self::new(bank, sink, user))
    }

    /// Run the trainer in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and
    /// return when the user quits.
    pub fn run(mut self) -> Result<(), TrainerError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), TrainerError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Topics => handle_topics_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_topics_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_topic();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_topic();
            false
        }
        KeyCode::Enter => {
            app.choose_topic();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            // Enter submits, then acknowledges the feedback panel.
            if app.awaiting_advance() {
                app.advance();
            } else {
                app.submit_answer();
            }
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
