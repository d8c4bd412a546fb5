//! The quiz session state machine.
//!
//! A session walks a fixed sequence of pairs, recording one normalized answer
//! per pair, until every pair has been answered or the countdown expires.

use crate::error::QuizError;
use crate::model::{normalize_answer, QuestionPair};
use crate::shuffle::shuffle;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting an answer for the pair at the current index.
    Active,
    /// No more pairs; only restart or leaving is possible.
    Finished,
}

/// Result of a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// The answer completed the session.
    pub finished: bool,
}

/// One run through a question set.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pairs: Vec<QuestionPair>,
    current_index: usize,
    user_answers: Vec<String>,
    correct_count: usize,
    asked_count: usize,
    finished: bool,
}

impl QuizSession {
    /// Start a session. An empty set is rejected up front so that scoring
    /// never divides by zero.
    pub fn new(pairs: Vec<QuestionPair>) -> Result<Self, QuizError> {
        if pairs.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }

        Ok(Self {
            pairs,
            current_index: 0,
            user_answers: Vec::new(),
            correct_count: 0,
            asked_count: 0,
            finished: false,
        })
    }

    pub fn state(&self) -> SessionState {
        if self.finished {
            SessionState::Finished
        } else {
            SessionState::Active
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn pairs(&self) -> &[QuestionPair] {
        &self.pairs
    }

    /// The pair awaiting an answer, or `None` once finished.
    pub fn current_pair(&self) -> Option<&QuestionPair> {
        if self.finished {
            None
        } else {
            self.pairs.get(self.current_index)
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Normalized answers, in the order they were given.
    pub fn user_answers(&self) -> &[String] {
        &self.user_answers
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn asked_count(&self) -> usize {
        self.asked_count
    }

    /// Record an answer for the current pair.
    ///
    /// Blank input is recorded and scored as incorrect. Returns `None`
    /// without touching the session when it is already finished.
    pub fn submit_answer(&mut self, text: &str) -> Option<AnswerOutcome> {
        let pair = self.current_pair()?;

        let given = normalize_answer(text);
        let correct = given == pair.normalized_answer();

        self.user_answers.push(given);
        self.asked_count += 1;
        if correct {
            self.correct_count += 1;
        }

        if self.current_index + 1 >= self.pairs.len() {
            self.finished = true;
            tracing::debug!(
                "session finished: {}/{} correct",
                self.correct_count,
                self.asked_count
            );
        } else {
            self.current_index += 1;
        }

        Some(AnswerOutcome {
            correct,
            finished: self.finished,
        })
    }

    /// End the session early, keeping the answers given so far.
    ///
    /// Returns `false` when the session had already finished.
    pub fn expire(&mut self) -> bool {
        if self.finished {
            return false;
        }
        tracing::debug!(
            "session expired after {} of {} questions",
            self.asked_count,
            self.pairs.len()
        );
        self.finished = true;
        true
    }

    /// Clear all progress and return to the first pair.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.user_answers.clear();
        self.correct_count = 0;
        self.asked_count = 0;
        self.finished = false;
    }

    /// Clear all progress and reorder the pairs with `seed`.
    pub fn restart_shuffled(&mut self, seed: u64) {
        self.restart();
        shuffle(&mut self.pairs, seed);
    }
}
