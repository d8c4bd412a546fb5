//! Core data model types for quizdeck.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single question and its expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPair {
    /// The prompt shown to the player.
    #[serde(alias = "Question")]
    pub question: String,
    /// The expected answer, compared after normalization.
    #[serde(alias = "Answer")]
    pub answer: String,
}

impl QuestionPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// The expected answer in normalized form.
    pub fn normalized_answer(&self) -> String {
        normalize_answer(&self.answer)
    }

    /// Whether `given` matches the expected answer, ignoring case and
    /// surrounding whitespace.
    pub fn accepts(&self, given: &str) -> bool {
        normalize_answer(given) == self.normalized_answer()
    }
}

impl fmt::Display for QuestionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.question, self.answer)
    }
}

/// Trim surrounding whitespace and lowercase.
pub fn normalize_answer(s: &str) -> String {
    s.trim().to_lowercase()
}
