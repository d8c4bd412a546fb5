//! The `quizdeck validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizdeck_core::loader;

pub fn execute(path: PathBuf) -> Result<()> {
    let pairs = loader::load(&path)?;
    println!("{}: {} questions", path.display(), pairs.len());

    let warnings = loader::validate_pairs(&pairs);
    for w in &warnings {
        println!("  [#{}] WARNING: {}", w.index + 1, w.message);
    }

    if warnings.is_empty() {
        println!("Question set valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
