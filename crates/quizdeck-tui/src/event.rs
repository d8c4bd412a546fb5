//! Events fed to the screens and the commands they send back.

use std::time::Duration;

use tui_textarea::Input;

use crate::router::ScreenId;

/// Input delivered to the router, one at a time.
#[derive(Debug, Clone)]
pub enum Event {
    KeyboardCharInput(Input),
    KeyboardCTRLC,
    KeyboardEnter,
    KeyboardEsc,
    KeyboardUp,
    KeyboardDown,
    KeyboardTab,
    KeyboardBackTab,
    UIResize(u16, u16),
    UITick,
    TimerExpired,
}

/// What a screen asks the loop to do after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Select(ScreenId),
    /// Start (or restart) the one-shot countdown.
    ArmTimer(Duration),
}
