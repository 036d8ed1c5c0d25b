use serde::Deserialize;

/// A single clinician scenario question.
///
/// Options carry their "A."–"D." labels as authored; the label-to-text
/// association is part of the option value and is never reshuffled
/// independently. `answer` is the exact correct option string.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: [String; 4],
    pub answer: String,
    pub feedback: String,
}

impl Question {
    /// Byte-for-byte comparison against the correct option. No case or
    /// whitespace normalization is applied.
    pub fn is_correct(&self, choice: &str) -> bool {
        self.answer == choice
    }
}
