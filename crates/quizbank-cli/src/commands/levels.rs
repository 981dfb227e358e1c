//! The `quizbank levels` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizbank_core::{TaxonomyLevel, DEFAULT_MINUTES};

/// Print the level table, or a single row when `name` is given.
///
/// A given name must match a level exactly; unlike question entry, there is
/// no fallback to the default estimate here.
pub fn execute(name: Option<String>) -> Result<()> {
    let levels = match name {
        Some(name) => vec![name.parse::<TaxonomyLevel>()?],
        None => TaxonomyLevel::ALL.to_vec(),
    };

    let mut table = Table::new();
    table.set_header(vec!["Level", "Spanish name", "Minutes"]);

    for level in &levels {
        table.add_row(vec![
            Cell::new(level.english_name()),
            Cell::new(level.spanish_name()),
            Cell::new(level.minutes()),
        ]);
    }

    println!("{table}");
    if levels.len() > 1 {
        println!("Any other level name is accepted with a default of {DEFAULT_MINUTES} minutes.");
    }

    Ok(())
}
