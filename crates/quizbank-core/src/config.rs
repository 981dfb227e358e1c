//! quizbank configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::QuizbankError;

/// How evaluation summaries are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = QuizbankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(QuizbankError::UnknownFormat(other.to_string())),
        }
    }
}

/// Top-level quizbank configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizbankConfig {
    /// Year stamped on new questions; questions from the year before are
    /// left out of evaluations.
    #[serde(default = "default_current_year")]
    pub current_year: i32,
    /// Question count offered when building an evaluation.
    #[serde(default = "default_count")]
    pub default_count: usize,
    /// Output format for evaluation summaries.
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_current_year() -> i32 {
    chrono::Local::now().year()
}

fn default_count() -> usize {
    5
}

impl Default for QuizbankConfig {
    fn default() -> Self {
        Self {
            current_year: default_current_year(),
            default_count: default_count(),
            output_format: OutputFormat::default(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `quizbank.toml` in the current directory
/// 2. `~/.config/quizbank/config.toml`
///
/// `QUIZBANK_CURRENT_YEAR` overrides the configured year.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizbankConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizbank.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizbankConfig::default(),
    };

    if let Ok(year) = std::env::var("QUIZBANK_CURRENT_YEAR") {
        match year.trim().parse::<i32>() {
            Ok(year) => config.current_year = year,
            Err(_) => tracing::warn!("ignoring invalid QUIZBANK_CURRENT_YEAR: {year:?}"),
        }
    }

    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config(content: &str) -> Result<QuizbankConfig> {
    let config: QuizbankConfig = toml::from_str(content)?;
    anyhow::ensure!(config.default_count >= 1, "default_count must be at least 1");
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizbank"))
}
