//! quizdeck CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizdeck", version, about = "Terminal quiz and flashcard player")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively: menu, quiz and score card screens
    Play {
        /// Question source (.json or .csv)
        #[arg(short = 'f', long = "file")]
        file: Option<PathBuf>,

        /// Shuffle the questions on every attempt
        #[arg(short = 's', long)]
        shuffle: bool,

        /// Countdown in seconds (untimed if absent)
        #[arg(short = 'd', long)]
        duration: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Answer against the clock on plain stdin/stdout
    Timed {
        /// Question source (.json or .csv)
        #[arg(short = 'f', long = "file")]
        file: Option<PathBuf>,

        /// Shuffle the questions
        #[arg(short = 's', long)]
        shuffle: bool,

        /// Time allowed in seconds
        #[arg(short = 'd', long)]
        duration: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a question source and report problems
    Validate {
        /// Question source (.json or .csv)
        #[arg(short = 'f', long = "file")]
        file: PathBuf,
    },

    /// Print the questions in a source as a table
    List {
        /// Question source (.json or .csv)
        #[arg(short = 'f', long = "file")]
        file: PathBuf,

        /// Leave the answer column out
        #[arg(long)]
        hide_answers: bool,
    },

    /// Create a starter config and sample question files
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quizdeck=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            file,
            shuffle,
            duration,
            config,
        } => commands::play::execute(file, shuffle, duration, config).await,
        Commands::Timed {
            file,
            shuffle,
            duration,
            config,
        } => commands::timed::execute(file, shuffle, duration, config).await,
        Commands::Validate { file } => commands::validate::execute(file),
        Commands::List { file, hide_answers } => commands::list::execute(file, hide_answers),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
