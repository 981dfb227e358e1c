//! The `quizbank interactive` command.

use std::io;
use std::path::PathBuf;

use anyhow::Result;

use quizbank_core::config::load_config_from;
use quizbank_core::OutputFormat;

use crate::session::Session;

pub fn execute(
    config_path: Option<PathBuf>,
    current_year: Option<i32>,
    format: Option<String>,
) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;

    if let Some(year) = current_year {
        config.current_year = year;
    }
    if let Some(format) = &format {
        config.output_format = format.parse::<OutputFormat>()?;
    }
    tracing::debug!(
        current_year = config.current_year,
        format = %config.output_format,
        "starting interactive session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    session.run()
}
