//! quizdeck-tui: Interactive terminal front-end.
//!
//! A single event loop feeds key, tick and timer events to a [`Router`],
//! which forwards them to whichever screen (menu, quiz, edit) is active.

pub mod app;
pub mod event;
pub mod events;
pub mod router;
pub mod screens;
pub mod styles;
pub mod terminal;

pub use app::{run, PlayOptions};
pub use event::{Command, Event};
pub use router::{Router, Screen, ScreenId};
