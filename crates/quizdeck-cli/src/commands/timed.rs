//! The `quizdeck timed` command: the plain stdin/stdout variant.
//!
//! Always exits with status 1 once the score has been printed.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

use quizdeck_core::config::load_config_from;
use quizdeck_core::loader;
use quizdeck_core::shuffle::{shuffle as shuffle_pairs, time_seed};
use quizdeck_core::{QuizSession, ScoreCard};

pub async fn execute(
    file: Option<PathBuf>,
    shuffle: bool,
    duration_secs: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let source = file.unwrap_or(config.timed_source);
    let mut pairs = loader::load(&source).context("could not load questions")?;
    if shuffle || config.shuffle {
        shuffle_pairs(&mut pairs, time_seed());
    }
    let mut session = QuizSession::new(pairs)?;

    let secs = duration_secs.unwrap_or(config.timed_duration_secs);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("\n\nYou have {secs}s to answer all questions - press enter to begin\n");
    lines.next_line().await?;

    let completed = ask_all(&mut session, &mut lines, Duration::from_secs(secs)).await?;
    if completed {
        println!("\n\nWell done - you answered all questions in the allowed time!!!");
    } else {
        println!("\n\nTime's up!!!");
    }

    print!("\n{}", ScoreCard::from_session(&session));
    std::io::stdout().flush()?;

    std::process::exit(1);
}

/// Ask every remaining question until the session finishes or `limit`
/// runs out. Returns `false` if time ran out first. End of input counts
/// as a blank answer.
async fn ask_all<R>(
    session: &mut QuizSession,
    lines: &mut Lines<R>,
    limit: Duration,
) -> Result<bool>
where
    R: AsyncBufRead + Unpin,
{
    let deadline = tokio::time::sleep(limit);
    tokio::pin!(deadline);

    while let Some(pair) = session.current_pair() {
        print!("{}=", pair.question);
        std::io::stdout().flush()?;

        tokio::select! {
            line = lines.next_line() => {
                let line = line?.unwrap_or_default();
                session.submit_answer(&line);
            }
            _ = &mut deadline => {
                session.expire();
                return Ok(false);
            }
        }
    }

    Ok(true)
}
