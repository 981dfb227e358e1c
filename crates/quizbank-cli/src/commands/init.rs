//! The `quizbank init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new("quizbank.toml");
    if path.exists() {
        println!("quizbank.toml already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG)?;
        println!("Created quizbank.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit quizbank.toml to set the current year and output format");
    println!("  2. Run: quizbank levels");
    println!("  3. Run: quizbank interactive");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizbank configuration

# Year stamped on new questions. Questions from the year before are
# left out when building an evaluation.
# current_year = 2025

# Question count offered when building an evaluation.
default_count = 5

# Evaluation output: "text", "json" or "markdown".
output_format = "text"
"#;
