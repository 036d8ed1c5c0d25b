//! Answer log sinks.
//!
//! A sink receives one record per submitted answer, at most once, with
//! no retry. A failed append is surfaced to the host as a warning; the
//! in-memory session outcome is authoritative and is never rolled
//! back.

mod csv;

use std::io;

use thiserror::Error;

use crate::session::AnswerRecord;

pub use csv::CsvSink;

/// Error appending a record to a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to open answer log: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write answer log row: {0}")]
    Csv(#[from] ::csv::Error),
}

/// Append-only destination for answer records.
pub trait AnswerSink {
    fn append(&mut self, user: &str, topic: &str, record: &AnswerRecord) -> Result<(), SinkError>;
}

/// In-memory sink for tests and embedding.
#[derive(Debug, Default)]
pub struct MemorySink {
    rows: Vec<(String, String, AnswerRecord)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[(String, String, AnswerRecord)] {
        &self.rows
    }
}

impl AnswerSink for MemorySink {
    fn append(&mut self, user: &str, topic: &str, record: &AnswerRecord) -> Result<(), SinkError> {
        self.rows
            .push((user.to_string(), topic.to_string(), record.clone()));
        Ok(())
    }
}
