//! The `quizdeck play` command.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use quizdeck_core::config::load_config_from;
use quizdeck_core::loader;
use quizdeck_tui::screens::QuizOptions;
use quizdeck_tui::PlayOptions;

pub async fn execute(
    file: Option<PathBuf>,
    shuffle: bool,
    duration_secs: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let source = file.unwrap_or(config.play_source);
    let pairs = loader::load(&source).context("could not load questions")?;
    tracing::info!("loaded {} questions from {}", pairs.len(), source.display());

    let options = PlayOptions {
        quiz: QuizOptions {
            shuffle: shuffle || config.shuffle,
            duration: duration_secs
                .or(config.play_duration_secs)
                .map(Duration::from_secs),
        },
        tick_rate: Duration::from_millis(config.tick_rate_ms),
    };

    quizdeck_tui::run(pairs, options).await
}
