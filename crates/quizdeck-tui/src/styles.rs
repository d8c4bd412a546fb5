//! Shared colours and text styles.

use ratatui::style::{Color, Modifier, Style};

pub const HELP: Color = Color::Rgb(0x62, 0x62, 0x62);
pub const ACCENT: Color = Color::Rgb(0x7d, 0x56, 0xf4);
pub const HEADING_FG: Color = Color::Rgb(0xfa, 0xfa, 0xfa);
pub const SELECTED: Color = Color::Indexed(170);

pub fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn help() -> Style {
    Style::default().fg(HELP)
}

pub fn heading() -> Style {
    Style::default()
        .fg(HEADING_FG)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn selected() -> Style {
    Style::default().fg(SELECTED)
}

pub fn correct() -> Style {
    Style::default().fg(Color::Green)
}

pub fn wrong() -> Style {
    Style::default().fg(Color::Red)
}
