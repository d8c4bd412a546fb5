//! Screen routing.
//!
//! The [`Router`] owns every screen for the lifetime of the process and
//! forwards events to the active one only; inactive screens see nothing,
//! not even ticks.

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::event::{Command, Event};

/// Identifies one of the fixed screens, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Menu,
    Quiz,
    Edit,
}

impl ScreenId {
    pub const ALL: [ScreenId; 3] = [ScreenId::Menu, ScreenId::Quiz, ScreenId::Edit];

    fn index(self) -> usize {
        match self {
            ScreenId::Menu => 0,
            ScreenId::Quiz => 1,
            ScreenId::Edit => 2,
        }
    }

    fn from_index(index: usize) -> ScreenId {
        Self::ALL[index % Self::ALL.len()]
    }
}

/// One mode of the interface.
pub trait Screen {
    fn id(&self) -> ScreenId;

    /// Called every time the screen becomes active.
    fn init(&mut self) -> Option<Command>;

    fn handle_event(&mut self, event: &Event) -> Option<Command>;

    fn render(&mut self, frame: &mut Frame, area: Rect);
}

pub struct Router {
    screens: Vec<Box<dyn Screen>>,
    active: ScreenId,
}

impl Router {
    /// Build a router from one screen per [`ScreenId`], in `ScreenId::ALL`
    /// order. The first screen starts active but is not initialized until
    /// [`Router::start`].
    ///
    /// # Panics
    ///
    /// Panics if the screens do not line up with `ScreenId::ALL`.
    pub fn new(screens: Vec<Box<dyn Screen>>) -> Router {
        let ids: Vec<ScreenId> = screens.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ScreenId::ALL, "router screens out of order");

        Router {
            screens,
            active: ScreenId::Menu,
        }
    }

    pub fn active(&self) -> ScreenId {
        self.active
    }

    /// Initialize the starting screen.
    pub fn start(&mut self) -> Option<Command> {
        self.select(self.active)
    }

    /// Switch to `id` and run its init hook. `Select` commands returned by
    /// the hook are followed; anything else is handed back to the caller.
    pub fn select(&mut self, id: ScreenId) -> Option<Command> {
        let mut next = id;
        loop {
            tracing::debug!("switching screen {:?} -> {:?}", self.active, next);
            self.active = next;
            match self.screens[next.index()].init() {
                Some(Command::Select(id)) => next = id,
                other => return other,
            }
        }
    }

    /// Cycle forward, wrapping from the last screen to the first.
    pub fn next(&mut self) -> Option<Command> {
        self.select(ScreenId::from_index(self.active.index() + 1))
    }

    /// Cycle backward, wrapping from the first screen to the last.
    pub fn previous(&mut self) -> Option<Command> {
        let len = ScreenId::ALL.len();
        self.select(ScreenId::from_index(self.active.index() + len - 1))
    }

    /// Handle one event. Only `Quit` and `ArmTimer` ever come back out;
    /// screen switches are applied here.
    pub fn update(&mut self, event: &Event) -> Option<Command> {
        let command = match event {
            Event::KeyboardCTRLC => return Some(Command::Quit),
            Event::KeyboardTab => return self.next(),
            Event::KeyboardBackTab => return self.previous(),
            event => self.screens[self.active.index()].handle_event(event),
        };

        match command {
            Some(Command::Select(id)) => self.select(id),
            other => other,
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.screens[self.active.index()].render(frame, area);
    }
}
