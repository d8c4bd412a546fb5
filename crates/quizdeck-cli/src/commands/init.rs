//! The `quizdeck init` command.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    for (name, content) in [
        ("quizdeck.toml", SAMPLE_CONFIG),
        ("cards.json", SAMPLE_CARDS),
        ("problems.csv", SAMPLE_PROBLEMS),
    ] {
        if Path::new(name).exists() {
            println!("{name} already exists, skipping.");
        } else {
            std::fs::write(name, content).with_context(|| format!("failed to write {name}"))?;
            println!("Created {name}");
        }
    }

    println!("\nNext steps:");
    println!("  1. Add your own questions to cards.json or problems.csv");
    println!("  2. Run: quizdeck validate -f cards.json");
    println!("  3. Run: quizdeck play   (or: quizdeck timed)");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizdeck configuration

# Question sources used when -f is not given.
play_source = "cards.json"
timed_source = "problems.csv"

# Shuffle the questions on every attempt.
shuffle = false

# Countdown for `quizdeck play`, in seconds. Leave unset for an untimed quiz.
# play_duration_secs = 120

# Countdown for `quizdeck timed`, in seconds.
timed_duration_secs = 30

tick_rate_ms = 500
"#;

const SAMPLE_CARDS: &str = r#"[
  { "question": "What is the capital of France?", "answer": "paris" },
  { "question": "Which planet is known as the red planet?", "answer": "mars" },
  { "question": "How many legs does a spider have?", "answer": "8" }
]
"#;

const SAMPLE_PROBLEMS: &str = "5+5,10\n7+3,10\n1+1,2\n8+3,11\n1+2,3\n8+6,14\n3+1,4\n";
