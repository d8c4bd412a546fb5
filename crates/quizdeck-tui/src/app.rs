//! The interactive event loop.

use std::time::Duration;

use anyhow::Result;
use quizdeck_core::QuestionPair;
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::event::Command;
use crate::events::EventsService;
use crate::router::Router;
use crate::screens::{EditScreen, MenuScreen, QuizOptions, QuizScreen};
use crate::terminal;

#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub quiz: QuizOptions,
    pub tick_rate: Duration,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            quiz: QuizOptions::default(),
            tick_rate: Duration::from_millis(500),
        }
    }
}

/// Build the screens for a question set. Fails on an empty set, before any
/// terminal state is touched.
pub fn build_router(pairs: Vec<QuestionPair>, options: &PlayOptions) -> Result<Router> {
    let quiz = QuizScreen::new(pairs, options.quiz.clone())?;

    Ok(Router::new(vec![
        Box::new(MenuScreen::new()),
        Box::new(quiz),
        Box::new(EditScreen::new()),
    ]))
}

/// Run the menu / quiz / edit interface until the player quits.
pub async fn run(pairs: Vec<QuestionPair>, options: PlayOptions) -> Result<()> {
    let mut router = build_router(pairs, &options)?;
    let mut events = EventsService::new(options.tick_rate);

    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    let result = run_loop(&mut term, &mut router, &mut events).await;

    terminal::restore()?;
    result
}

async fn run_loop<B: Backend>(
    term: &mut Terminal<B>,
    router: &mut Router,
    events: &mut EventsService,
) -> Result<()> {
    let mut pending = router.start();

    loop {
        match pending.take() {
            Some(Command::Quit) => return Ok(()),
            Some(Command::ArmTimer(duration)) => events.arm_timer(duration),
            // The router applies screen switches itself.
            Some(Command::Select(_)) | None => {}
        }

        term.draw(|frame| router.render(frame))?;

        let event = events.next().await?;
        pending = router.update(&event);
    }
}
