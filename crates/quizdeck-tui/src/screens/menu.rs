//! The main menu.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::event::{Command, Event};
use crate::router::{Screen, ScreenId};
use crate::styles;

const TITLE: &str = "What's the plan?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    RunQuiz,
    EditQuestions,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 3] = [MenuItem::RunQuiz, MenuItem::EditQuestions, MenuItem::Quit];

    fn label(self) -> &'static str {
        match self {
            MenuItem::RunQuiz => "Run Quiz",
            MenuItem::EditQuestions => "Edit Questions",
            MenuItem::Quit => "Quit",
        }
    }

    fn command(self) -> Command {
        match self {
            MenuItem::RunQuiz => Command::Select(ScreenId::Quiz),
            MenuItem::EditQuestions => Command::Select(ScreenId::Edit),
            MenuItem::Quit => Command::Quit,
        }
    }
}

#[derive(Debug)]
pub struct MenuScreen {
    list_state: ListState,
}

impl MenuScreen {
    pub fn new() -> MenuScreen {
        MenuScreen {
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    fn cursor(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    fn move_cursor(&mut self, down: bool) {
        let cursor = self.cursor();
        let next = if down {
            (cursor + 1).min(MenuItem::ALL.len() - 1)
        } else {
            cursor.saturating_sub(1)
        };
        self.list_state.select(Some(next));
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MenuScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Menu
    }

    fn init(&mut self) -> Option<Command> {
        None
    }

    fn handle_event(&mut self, event: &Event) -> Option<Command> {
        match event {
            Event::KeyboardUp => self.move_cursor(false),
            Event::KeyboardDown => self.move_cursor(true),
            Event::KeyboardEnter => return Some(MenuItem::ALL[self.cursor()].command()),
            _ => {}
        }
        None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [_, title_area, list_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(MenuItem::ALL.len() as u16 + 1),
            Constraint::Min(1),
        ])
        .areas(area);

        let title = Line::from(vec![Span::raw("  "), Span::styled(TITLE, styles::bold())]);
        frame.render_widget(Paragraph::new(title), title_area);

        let items: Vec<ListItem> = MenuItem::ALL
            .iter()
            .enumerate()
            .map(|(i, item)| ListItem::new(format!("{}. {}", i + 1, item.label())))
            .collect();

        let list = List::new(items)
            .highlight_style(styles::selected())
            .highlight_symbol("  > ");
        frame.render_stateful_widget(list, list_area, &mut self.list_state);

        frame.render_widget(
            Paragraph::new("    ↑/↓ move • enter select • ctrl+c quit").style(styles::help()),
            help_area,
        );
    }
}
