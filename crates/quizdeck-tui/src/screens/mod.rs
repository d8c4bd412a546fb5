//! The menu, quiz and edit screens.

pub mod edit;
pub mod menu;
pub mod quiz;

pub use edit::EditScreen;
pub use menu::MenuScreen;
pub use quiz::{QuizOptions, QuizScreen};
