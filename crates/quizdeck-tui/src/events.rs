//! The events service behind the interactive loop.

use std::io;
use std::pin::Pin;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::{Stream, StreamExt};
use tokio::time::{self, Interval, MissedTickBehavior, Sleep};
use tui_textarea::{Input, Key};

use crate::event::Event;

/// Merges terminal input, the UI tick and the optional countdown into one
/// stream of [`Event`]s.
pub struct EventsService<S = EventStream> {
    crossterm_events: S,
    input_closed: bool,
    ticker: Interval,
    timer: Option<Pin<Box<Sleep>>>,
}

impl EventsService<EventStream> {
    pub fn new(tick_rate: Duration) -> EventsService<EventStream> {
        EventsService::with_stream(EventStream::new(), tick_rate)
    }
}

impl<S> EventsService<S>
where
    S: Stream<Item = io::Result<CrosstermEvent>> + Unpin,
{
    pub fn with_stream(stream: S, tick_rate: Duration) -> EventsService<S> {
        let mut ticker = time::interval(tick_rate);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        EventsService {
            crossterm_events: stream,
            input_closed: false,
            ticker,
            timer: None,
        }
    }

    /// Fire [`Event::TimerExpired`] once after `duration`, replacing any
    /// countdown that is still pending.
    pub fn arm_timer(&mut self, duration: Duration) {
        self.timer = Some(Box::pin(time::sleep(duration)));
    }

    pub fn timer_armed(&self) -> bool {
        self.timer.is_some()
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.crossterm_events.next(), if !self.input_closed => match event {
                    Some(Ok(input)) => map_crossterm(input),
                    Some(Err(err)) => return Err(err.into()),
                    None => {
                        self.input_closed = true;
                        None
                    }
                },
                _ = self.ticker.tick() => Some(Event::UITick),
                _ = wait_for(&mut self.timer) => {
                    self.timer = None;
                    Some(Event::TimerExpired)
                }
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}

async fn wait_for(timer: &mut Option<Pin<Box<Sleep>>>) {
    match timer {
        Some(sleep) => sleep.as_mut().await,
        None => std::future::pending().await,
    }
}

/// Translate a raw terminal event; anything the screens don't use maps to `None`.
pub fn map_crossterm(event: CrosstermEvent) -> Option<Event> {
    let keyevent = match event {
        CrosstermEvent::Resize(width, height) => return Some(Event::UIResize(width, height)),
        CrosstermEvent::Key(keyevent) if keyevent.kind == KeyEventKind::Press => keyevent,
        _ => return None,
    };

    let key = match keyevent.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => return Some(Event::KeyboardBackTab),
        KeyCode::Delete => Key::Delete,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Esc => Key::Esc,
        _ => return None,
    };

    let input = Input {
        key,
        ctrl: keyevent.modifiers.contains(KeyModifiers::CONTROL),
        alt: keyevent.modifiers.contains(KeyModifiers::ALT),
        shift: keyevent.modifiers.contains(KeyModifiers::SHIFT),
    };

    let event = match input {
        Input {
            key: Key::Char('c'),
            ctrl: true,
            ..
        } => Event::KeyboardCTRLC,
        Input { key: Key::Enter, .. } => Event::KeyboardEnter,
        Input { key: Key::Esc, .. } => Event::KeyboardEsc,
        Input { key: Key::Up, .. } => Event::KeyboardUp,
        Input { key: Key::Down, .. } => Event::KeyboardDown,
        Input { key: Key::Tab, .. } => Event::KeyboardTab,
        input => Event::KeyboardCharInput(input),
    };

    Some(event)
}
