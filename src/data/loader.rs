use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::models::QuestionBank;

/// Error loading or validating a question bank.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read question file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse question file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question bank contains no topics")]
    NoTopics,
    #[error("topic \"{0}\" has no questions")]
    EmptyTopic(String),
    #[error("topic \"{topic}\", question {index}: correct answer is not one of the options")]
    AnswerNotInOptions { topic: String, index: usize },
}

/// Load a question bank from a JSON file mapping topic names to
/// question lists, validating it before use.
pub fn load_bank_from_json<P: AsRef<Path>>(path: P) -> Result<QuestionBank, LoadError> {
    let json = fs::read_to_string(path)?;
    bank_from_json_str(&json)
}

fn bank_from_json_str(json: &str) -> Result<QuestionBank, LoadError> {
    let bank: QuestionBank = serde_json::from_str(json)?;
    validate(&bank)?;
    Ok(bank)
}

/// Every topic must be non-empty and every question's correct answer
/// must be one of its four options.
fn validate(bank: &QuestionBank) -> Result<(), LoadError> {
    if bank.is_empty() {
        return Err(LoadError::NoTopics);
    }

    for (topic, questions) in bank.iter() {
        if questions.is_empty() {
            return Err(LoadError::EmptyTopic(topic.to_string()));
        }
        for (index, question) in questions.iter().enumerate() {
            if !question.options.contains(&question.answer) {
                return Err(LoadError::AnswerNotInOptions {
                    topic: topic.to_string(),
                    index,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "PNH": [
            {
                "text": "Which option is correct?",
                "options": ["A. One", "B. Two", "C. Three", "D. Four"],
                "answer": "B. Two",
                "feedback": "Two is right."
            }
        ]
    }"#;

    #[test]
    fn parses_valid_bank() {
        let bank = bank_from_json_str(VALID).unwrap();
        assert_eq!(bank.topic_count(), 1);
        assert_eq!(bank.questions("PNH").unwrap().len(), 1);
        assert!(bank.contains_topic("PNH"));
        assert!(!bank.contains_topic("aHUS"));
    }

    #[test]
    fn rejects_empty_bank() {
        assert!(matches!(
            bank_from_json_str("{}"),
            Err(LoadError::NoTopics)
        ));
    }

    #[test]
    fn rejects_empty_topic() {
        let json = r#"{"PNH": []}"#;
        assert!(matches!(
            bank_from_json_str(json),
            Err(LoadError::EmptyTopic(topic)) if topic == "PNH"
        ));
    }

    #[test]
    fn rejects_answer_not_in_options() {
        let json = r#"{
            "PNH": [
                {
                    "text": "Which option is correct?",
                    "options": ["A. One", "B. Two", "C. Three", "D. Four"],
                    "answer": "E. Five",
                    "feedback": "..."
                }
            ]
        }"#;
        assert!(matches!(
            bank_from_json_str(json),
            Err(LoadError::AnswerNotInOptions { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_wrong_option_count() {
        let json = r#"{
            "PNH": [
                {
                    "text": "Which option is correct?",
                    "options": ["A. One", "B. Two"],
                    "answer": "B. Two",
                    "feedback": "..."
                }
            ]
        }"#;
        assert!(matches!(bank_from_json_str(json), Err(LoadError::Parse(_))));
    }
}
