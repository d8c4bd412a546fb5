//! Score card for a finished (or expired) session.

use std::fmt;

use crate::session::QuizSession;

pub const CORRECT_MARK: &str = "✅";
pub const WRONG_MARK: &str = "❌";

/// One answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub question: String,
    /// The normalized answer the player gave.
    pub given: String,
    pub expected: String,
    pub correct: bool,
}

impl ScoreEntry {
    /// `"<given> ✅"` or `"<given> ❌ (<expected>)"`.
    pub fn answer_line(&self) -> String {
        if self.correct {
            format!("{} {CORRECT_MARK}", self.given)
        } else {
            format!("{} {WRONG_MARK} ({})", self.given, self.expected)
        }
    }
}

/// Per-question results plus the overall score.
#[derive(Debug, Clone)]
pub struct ScoreCard {
    pub entries: Vec<ScoreEntry>,
    pub correct: usize,
    pub asked: usize,
}

impl ScoreCard {
    /// Build a score card from the answers recorded so far.
    pub fn from_session(session: &QuizSession) -> Self {
        let entries = session
            .pairs()
            .iter()
            .zip(session.user_answers())
            .map(|(pair, given)| ScoreEntry {
                question: pair.question.clone(),
                given: given.clone(),
                expected: pair.answer.clone(),
                correct: pair.accepts(given),
            })
            .collect();

        Self {
            entries,
            correct: session.correct_count(),
            asked: session.asked_count(),
        }
    }

    /// Floored percentage of correct answers, or `None` if nothing was asked.
    pub fn percentage(&self) -> Option<u32> {
        percentage(self.correct, self.asked)
    }

    /// `"correct/asked (percentage%)"`; the percentage is left out when
    /// nothing was asked.
    pub fn summary(&self) -> String {
        match self.percentage() {
            Some(pct) => format!("{}/{} ({pct}%)", self.correct, self.asked),
            None => format!("{}/{}", self.correct, self.asked),
        }
    }

    /// Plain-text rendering used by the line-mode front-end.
    pub fn render_text(&self) -> String {
        let mut out = String::from("Score Card\n");

        for entry in &self.entries {
            out.push_str(&format!("\n{}\n{}\n", entry.question, entry.answer_line()));
        }

        out.push_str(&format!("\nYour score was: {}\n", self.summary()));
        out
    }
}

impl fmt::Display for ScoreCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text())
    }
}

/// `floor(correct / asked * 100)`, or `None` when `asked == 0`.
pub fn percentage(correct: usize, asked: usize) -> Option<u32> {
    if asked == 0 {
        return None;
    }
    Some((correct * 100 / asked) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionPair;

    fn finished_session(pairs: &[(&str, &str)], answers: &[&str]) -> QuizSession {
        let pairs = pairs
            .iter()
            .map(|(q, a)| QuestionPair::new(*q, *a))
            .collect();
        let mut session = QuizSession::new(pairs).unwrap();
        for a in answers {
            session.submit_answer(a);
        }
        session
    }

    #[test]
    fn percentage_floors() {
        assert_eq!(percentage(1, 3), Some(33));
        assert_eq!(percentage(2, 3), Some(66));
        assert_eq!(percentage(3, 3), Some(100));
        assert_eq!(percentage(0, 4), Some(0));
        assert_eq!(percentage(0, 0), None);
    }

    #[test]
    fn single_correct_answer() {
        let session = finished_session(&[("2+2?", "4")], &["4"]);
        let card = ScoreCard::from_session(&session);

        assert_eq!(card.summary(), "1/1 (100%)");
        let text = card.render_text();
        assert!(text.contains("2+2?"));
        assert!(text.contains("4 ✅"));
        assert!(text.contains("Your score was: 1/1 (100%)"));
    }

    #[test]
    fn wrong_answer_shows_expected() {
        let session = finished_session(
            &[("Capital of France?", "paris"), ("2+2?", "4")],
            &["Lyon", "4"],
        );
        let card = ScoreCard::from_session(&session);

        assert_eq!(card.summary(), "1/2 (50%)");
        assert_eq!(card.entries[0].answer_line(), "lyon ❌ (paris)");
        assert!(card.entries[1].correct);
    }

    #[test]
    fn expired_session_reports_answered_pairs_only() {
        let mut session = finished_session(&[("a", "1"), ("b", "2"), ("c", "3")], &["1"]);
        session.expire();
        let card = ScoreCard::from_session(&session);

        assert_eq!(card.entries.len(), 1);
        assert_eq!(card.summary(), "1/1 (100%)");
    }

    #[test]
    fn nothing_asked_has_no_percentage() {
        let mut session = finished_session(&[("a", "1")], &[]);
        session.expire();
        let card = ScoreCard::from_session(&session);

        assert_eq!(card.percentage(), None);
        assert_eq!(card.summary(), "0/0");
        assert!(!card.render_text().contains('%'));
    }
}
