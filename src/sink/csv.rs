use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use crate::session::AnswerRecord;
use crate::sink::{AnswerSink, SinkError};

/// Column layout of the answer log. Existing logs depend on this exact
/// header, so it must not change.
const HEADER: [&str; 7] = [
    "Timestamp",
    "User Name",
    "Topic",
    "Question",
    "User Answer",
    "Correct Answer",
    "Is Correct",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Appends answer records to a CSV file.
///
/// The first append to a missing or empty destination writes the
/// seven-column header; later appends add rows only. The file is
/// opened per append so the log is durable even if the host is killed
/// mid-session.
#[derive(Debug)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AnswerSink for CsvSink {
    fn append(&mut self, user: &str, topic: &str, record: &AnswerRecord) -> Result<(), SinkError> {
        let fresh = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if fresh {
            writer.write_record(HEADER)?;
        }

        let timestamp = record.timestamp.format(TIMESTAMP_FORMAT).to_string();
        let is_correct = if record.is_correct { "true" } else { "false" };
        writer.write_record([
            timestamp.as_str(),
            user,
            topic,
            record.question.as_str(),
            record.user_answer.as_str(),
            record.correct_answer.as_str(),
            is_correct,
        ])?;
        writer.flush().map_err(SinkError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use tempfile::TempDir;

    use super::*;

    fn record(is_correct: bool) -> AnswerRecord {
        AnswerRecord {
            question: "Which inhibitor?".to_string(),
            user_answer: "B. Switch inhibitors.".to_string(),
            correct_answer: "B. Switch inhibitors.".to_string(),
            feedback: "Correct choice.".to_string(),
            is_correct,
            timestamp: Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap(),
        }
    }

    #[test]
    fn first_append_writes_header_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("answers_log.csv");
        let mut sink = CsvSink::new(&path);

        sink.append("Alice", "PNH", &record(true)).unwrap();
        sink.append("Alice", "PNH", &record(false)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Timestamp,User Name,Topic,Question,User Answer,Correct Answer,Is Correct"
        );
        assert!(lines[1].starts_with("2025-03-14 09:26:53,Alice,PNH,"));
        assert!(lines[1].ends_with(",true"));
        assert!(lines[2].ends_with(",false"));
    }

    #[test]
    fn appends_to_existing_log_without_repeating_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("answers_log.csv");

        CsvSink::new(&path).append("Alice", "PNH", &record(true)).unwrap();
        // A second sink over the same path, as after a host restart.
        CsvSink::new(&path).append("Bob", "gMG", &record(true)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("Timestamp,User Name").count(), 1);
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn quotes_fields_containing_commas() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("answers_log.csv");
        let mut sink = CsvSink::new(&path);

        let mut rec = record(false);
        rec.question = "Fatigue, anemia, and dark urine?".to_string();
        sink.append("Alice", "PNH", &rec).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[3], "Fatigue, anemia, and dark urine?");
        assert_eq!(&row[6], "false");
    }
}
