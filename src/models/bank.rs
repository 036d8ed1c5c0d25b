use std::collections::BTreeMap;

use serde::Deserialize;

use crate::models::Question;

/// Read-only mapping from topic name to its questions.
///
/// Loaded once at startup and never mutated afterwards. Topics are kept
/// in a `BTreeMap` so the topic list renders in a stable order.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct QuestionBank {
    topics: BTreeMap<String, Vec<Question>>,
}

impl QuestionBank {
    pub fn new(topics: BTreeMap<String, Vec<Question>>) -> Self {
        Self { topics }
    }

    /// Topic names in stable (sorted) order.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Questions for a topic, or `None` if the topic is unknown.
    pub fn questions(&self, topic: &str) -> Option<&[Question]> {
        self.topics.get(topic).map(Vec::as_slice)
    }

    pub fn contains_topic(&self, topic: &str) -> bool {
        self.topics.contains_key(topic)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Question])> {
        self.topics
            .iter()
            .map(|(name, questions)| (name.as_str(), questions.as_slice()))
    }
}
