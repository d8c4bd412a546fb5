//! Question-by-question play and the score card.

use std::time::{Duration, Instant};

use quizdeck_core::report::{ScoreCard, ScoreEntry, CORRECT_MARK, WRONG_MARK};
use quizdeck_core::shuffle::time_seed;
use quizdeck_core::{QuestionPair, QuizError, QuizSession};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tui_textarea::TextArea;

use crate::event::{Command, Event};
use crate::router::{Screen, ScreenId};
use crate::styles;

const PLACEHOLDER: &str = "..your answer";

#[derive(Debug, Clone, Default)]
pub struct QuizOptions {
    /// Reorder the questions every time a session starts.
    pub shuffle: bool,
    /// Countdown per session.
    pub duration: Option<Duration>,
}

pub struct QuizScreen<'a> {
    session: QuizSession,
    options: QuizOptions,
    input: TextArea<'a>,
    cursor_visible: bool,
    deadline: Option<Instant>,
    timed_out: bool,
    scroll: u16,
}

impl<'a> QuizScreen<'a> {
    /// Fails with [`QuizError::EmptyQuestionSet`] so that an empty deck is
    /// reported before the terminal is taken over.
    pub fn new(
        pairs: Vec<QuestionPair>,
        options: QuizOptions,
    ) -> Result<QuizScreen<'a>, QuizError> {
        Ok(QuizScreen {
            session: QuizSession::new(pairs)?,
            options,
            input: new_input(),
            cursor_visible: true,
            deadline: None,
            timed_out: false,
            scroll: 0,
        })
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Start a fresh session, re-arming the countdown if there is one.
    fn reset(&mut self) -> Option<Command> {
        if self.options.shuffle {
            self.session.restart_shuffled(time_seed());
        } else {
            self.session.restart();
        }

        self.input = new_input();
        self.cursor_visible = true;
        self.timed_out = false;
        self.scroll = 0;
        self.deadline = self.options.duration.map(|d| Instant::now() + d);

        self.options.duration.map(Command::ArmTimer)
    }

    fn submit(&mut self) {
        let answer = self.input.lines().join(" ");
        if let Some(outcome) = self.session.submit_answer(&answer) {
            tracing::debug!(
                "answer {} ({}/{})",
                if outcome.correct { "correct" } else { "wrong" },
                self.session.correct_count(),
                self.session.asked_count()
            );
        }
        self.input = new_input();
    }

    fn remaining(&self) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(Instant::now()))
    }

    fn render_question(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, question_area, input_area, help_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(2),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(area);

        let total = self.session.pairs().len();
        let mut header = vec![Span::styled(
            format!("Question {}/{}", self.session.current_index() + 1, total),
            styles::help(),
        )];
        if let Some(remaining) = self.remaining() {
            header.push(Span::styled(
                format!(" - {}s left", remaining.as_secs()),
                styles::help(),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(header)), header_area);

        let question = self
            .session
            .current_pair()
            .map(|p| p.question.clone())
            .unwrap_or_default();
        frame.render_widget(
            Paragraph::new(Span::styled(question, styles::bold())).wrap(Wrap { trim: false }),
            question_area,
        );

        let cursor = if self.cursor_visible {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.input.set_cursor_style(cursor);
        frame.render_widget(&self.input, input_area);

        frame.render_widget(
            Paragraph::new("Press Ctrl+C to exit - Escape for main menu").style(styles::help()),
            help_area,
        );
    }

    fn render_score_card(&self, frame: &mut Frame, area: Rect) {
        let card = ScoreCard::from_session(&self.session);

        let [card_area, summary_area, help_area] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(" Score Card ", styles::heading())),
        ];
        if self.timed_out {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Time's up!", styles::wrong())));
        }
        for entry in &card.entries {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(entry.question.clone(), styles::bold())));
            lines.push(answer_line(entry));
        }

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0)),
            card_area,
        );

        frame.render_widget(
            Paragraph::new(format!("Your score was: {}", card.summary())).block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(styles::help()),
            ),
            summary_area,
        );

        frame.render_widget(
            Paragraph::new("Press Ctrl+C to exit - Enter to restart - Escape for main menu")
                .style(styles::help()),
            help_area,
        );
    }
}

impl Screen for QuizScreen<'_> {
    fn id(&self) -> ScreenId {
        ScreenId::Quiz
    }

    /// Every entry starts over.
    fn init(&mut self) -> Option<Command> {
        self.reset()
    }

    fn handle_event(&mut self, event: &Event) -> Option<Command> {
        match event {
            Event::KeyboardEsc => return Some(Command::Select(ScreenId::Menu)),
            Event::KeyboardEnter if self.session.is_finished() => return self.reset(),
            Event::KeyboardEnter => self.submit(),
            Event::KeyboardCharInput(input) if !self.session.is_finished() => {
                self.input.input(input.clone());
            }
            Event::KeyboardUp if self.session.is_finished() => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            Event::KeyboardDown if self.session.is_finished() => {
                self.scroll = self.scroll.saturating_add(1);
            }
            Event::TimerExpired => {
                if self.session.expire() {
                    self.timed_out = true;
                }
            }
            Event::UITick => self.cursor_visible = !self.cursor_visible,
            _ => {}
        }
        None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.session.is_finished() {
            self.render_score_card(frame, area);
        } else {
            self.render_question(frame, area);
        }
    }
}

fn new_input<'a>() -> TextArea<'a> {
    let mut input = TextArea::default();
    input.set_placeholder_text(PLACEHOLDER);
    input.set_cursor_line_style(Style::default());
    input
}

fn answer_line(entry: &ScoreEntry) -> Line<'static> {
    if entry.correct {
        Line::from(vec![
            Span::raw(entry.given.clone()),
            Span::styled(format!(" {CORRECT_MARK}"), styles::correct()),
        ])
    } else {
        Line::from(vec![
            Span::raw(entry.given.clone()),
            Span::styled(format!(" {WRONG_MARK}"), styles::wrong()),
            Span::styled(format!(" ({})", entry.expected), styles::bold()),
        ])
    }
}
