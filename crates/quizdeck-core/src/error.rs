//! Quiz error types.
//!
//! Every variant is fatal at load time: the front-ends report it and exit
//! before any interactive UI is started.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a question source or starting a session.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question source could not be read.
    #[error("failed to read question source {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension is neither `.csv` nor `.json`.
    #[error("unsupported question source {}: expected a .csv or .json file", .0.display())]
    Format(PathBuf),

    /// The file content is not a valid question set.
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// A session was started with no questions.
    #[error("question set is empty, nothing to ask")]
    EmptyQuestionSet,
}

impl QuizError {
    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        QuizError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_path() {
        let err = QuizError::Format(PathBuf::from("deck.txt"));
        assert!(err.to_string().contains("deck.txt"));

        let err = QuizError::parse("deck.csv", "line 3: expected 2 fields, found 1");
        assert_eq!(
            err.to_string(),
            "failed to parse deck.csv: line 3: expected 2 fields, found 1"
        );
    }
}
