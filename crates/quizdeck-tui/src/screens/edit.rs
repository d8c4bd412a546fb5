//! Placeholder screen for question editing.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::event::{Command, Event};
use crate::router::{Screen, ScreenId};
use crate::styles;

/// Placeholder for question editing, which is not supported.
#[derive(Debug, Default)]
pub struct EditScreen;

impl EditScreen {
    pub fn new() -> EditScreen {
        EditScreen
    }
}

impl Screen for EditScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Edit
    }

    fn init(&mut self) -> Option<Command> {
        None
    }

    fn handle_event(&mut self, event: &Event) -> Option<Command> {
        match event {
            Event::KeyboardEsc | Event::KeyboardEnter => Some(Command::Select(ScreenId::Menu)),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = vec![
            Line::from("Editing questions is not available yet."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Ctrl+C to exit - Escape/Return for main menu",
                styles::help(),
            )),
        ];
        frame.render_widget(Paragraph::new(text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::render_to_string;

    #[test]
    fn escape_and_enter_return_to_menu() {
        let mut edit = EditScreen::new();
        for event in [Event::KeyboardEsc, Event::KeyboardEnter] {
            assert_eq!(
                edit.handle_event(&event),
                Some(Command::Select(ScreenId::Menu))
            );
        }
        assert_eq!(edit.handle_event(&Event::UITick), None);
    }

    #[test]
    fn renders_placeholder() {
        let text = render_to_string(&mut EditScreen::new(), 60, 5);
        assert!(text.contains("not available yet"));
        assert!(text.contains("Escape/Return for main menu"));
    }
}
