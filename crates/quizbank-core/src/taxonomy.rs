//! Bloom taxonomy levels and the time estimate attached to each.

use std::fmt;
use std::str::FromStr;

use crate::error::QuizbankError;

/// Minutes assigned to a question whose level name is not recognized.
pub const DEFAULT_MINUTES: u32 = 2;

/// The six recognized cognitive levels, from lowest to highest demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaxonomyLevel {
    Remember,
    Understand,
    Apply,
    Analyze,
    Evaluate,
    Create,
}

impl TaxonomyLevel {
    pub const ALL: [TaxonomyLevel; 6] = [
        TaxonomyLevel::Remember,
        TaxonomyLevel::Understand,
        TaxonomyLevel::Apply,
        TaxonomyLevel::Analyze,
        TaxonomyLevel::Evaluate,
        TaxonomyLevel::Create,
    ];

    /// Estimated minutes to answer a question at this level.
    pub fn minutes(self) -> u32 {
        match self {
            TaxonomyLevel::Remember => 1,
            TaxonomyLevel::Understand => 2,
            TaxonomyLevel::Apply => 3,
            TaxonomyLevel::Analyze => 4,
            TaxonomyLevel::Evaluate => 5,
            TaxonomyLevel::Create => 6,
        }
    }

    pub fn english_name(self) -> &'static str {
        match self {
            TaxonomyLevel::Remember => "Remember",
            TaxonomyLevel::Understand => "Understand",
            TaxonomyLevel::Apply => "Apply",
            TaxonomyLevel::Analyze => "Analyze",
            TaxonomyLevel::Evaluate => "Evaluate",
            TaxonomyLevel::Create => "Create",
        }
    }

    pub fn spanish_name(self) -> &'static str {
        match self {
            TaxonomyLevel::Remember => "Recordar",
            TaxonomyLevel::Understand => "Entender",
            TaxonomyLevel::Apply => "Aplicar",
            TaxonomyLevel::Analyze => "Analizar",
            TaxonomyLevel::Evaluate => "Evaluar",
            TaxonomyLevel::Create => "Crear",
        }
    }

    /// Exact, case-sensitive lookup by English or Spanish name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.english_name() == name || level.spanish_name() == name)
    }
}

impl fmt::Display for TaxonomyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

impl FromStr for TaxonomyLevel {
    type Err = QuizbankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| QuizbankError::UnknownLevel(s.to_string()))
    }
}

/// Estimated minutes for a level name. Unrecognized names get [`DEFAULT_MINUTES`].
pub fn estimate_minutes(level: &str) -> u32 {
    TaxonomyLevel::from_name(level)
        .map(TaxonomyLevel::minutes)
        .unwrap_or(DEFAULT_MINUTES)
}
