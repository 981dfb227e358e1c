//! quizbank CLI — interactive question bank and evaluation builder.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod session;

#[derive(Parser)]
#[command(
    name = "quizbank",
    version,
    about = "Exam question bank and timed evaluation builder"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the current year (new questions use it; the year before is
    /// left out of evaluations)
    #[arg(long, global = true)]
    current_year: Option<i32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Interactive {
        /// Evaluation output format: text, json, markdown
        #[arg(long)]
        format: Option<String>,
    },

    /// List taxonomy levels and their time estimates
    Levels {
        /// Show a single level (English or Spanish name, exact spelling)
        name: Option<String>,
    },

    /// Create a starter quizbank.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizbank=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Interactive { format: None }) {
        Commands::Interactive { format } => {
            commands::interactive::execute(cli.config, cli.current_year, format)
        }
        Commands::Levels { name } => commands::levels::execute(name),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
