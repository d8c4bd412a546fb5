//! quizdeck-core: Question loading, quiz sessions, and scoring.
//!
//! This crate defines the question model, the quiz session state machine,
//! and the score card that the terminal front-ends build on.

pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod report;
pub mod session;
pub mod shuffle;

pub use error::QuizError;
pub use model::QuestionPair;
pub use report::ScoreCard;
pub use session::QuizSession;
