//! The `quizdeck list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizdeck_core::loader;

pub fn execute(path: PathBuf, hide_answers: bool) -> Result<()> {
    let pairs = loader::load(&path)?;

    let mut table = Table::new();
    if hide_answers {
        table.set_header(vec!["#", "Question"]);
    } else {
        table.set_header(vec!["#", "Question", "Answer"]);
    }

    for (i, pair) in pairs.iter().enumerate() {
        let mut row = vec![Cell::new(i + 1), Cell::new(&pair.question)];
        if !hide_answers {
            row.push(Cell::new(&pair.answer));
        }
        table.add_row(row);
    }

    println!("{table}");
    println!("{} question(s)", pairs.len());

    Ok(())
}
