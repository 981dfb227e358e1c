//! Core data model types for quizbank.
//!
//! A [`Question`] carries the fields every question shares plus a closed
//! [`QuestionBody`] holding the variant-specific data. Questions are only
//! ever created by the bank, which assigns their id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuizbankError;

/// Bank-assigned question identifier. Starts at 1 and is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = QuizbankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(QuestionId)
            .map_err(|_| QuizbankError::InvalidNumber(s.trim().to_string()))
    }
}

/// Variant-specific question data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionBody {
    MultipleChoice {
        /// Option texts in display order.
        options: Vec<String>,
        /// Zero-based index into `options`. Not range-checked.
        correct_index: usize,
    },
    TrueFalse {
        answer: bool,
    },
}

impl QuestionBody {
    pub fn kind(&self) -> QuestionKind {
        match self {
            QuestionBody::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            QuestionBody::TrueFalse { .. } => QuestionKind::TrueFalse,
        }
    }
}

/// The two question shapes the bank knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    #[serde(rename = "Multiple Choice")]
    MultipleChoice,
    #[serde(rename = "True/False")]
    TrueFalse,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::MultipleChoice => write!(f, "Multiple Choice"),
            QuestionKind::TrueFalse => write!(f, "True/False"),
        }
    }
}

/// Everything needed to create a question except what the bank assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub statement: String,
    /// Taxonomy level as entered. Unrecognized names are kept verbatim.
    pub level: String,
    pub solution: String,
    pub year: i32,
    pub body: QuestionBody,
}

impl QuestionDraft {
    pub fn multiple_choice(
        statement: impl Into<String>,
        level: impl Into<String>,
        solution: impl Into<String>,
        year: i32,
        options: Vec<String>,
        correct_index: usize,
    ) -> Self {
        Self {
            statement: statement.into(),
            level: level.into(),
            solution: solution.into(),
            year,
            body: QuestionBody::MultipleChoice {
                options,
                correct_index,
            },
        }
    }

    pub fn true_false(
        statement: impl Into<String>,
        level: impl Into<String>,
        solution: impl Into<String>,
        year: i32,
        answer: bool,
    ) -> Self {
        Self {
            statement: statement.into(),
            level: level.into(),
            solution: solution.into(),
            year,
            body: QuestionBody::TrueFalse { answer },
        }
    }
}

/// A question owned by a [`QuestionBank`](crate::bank::QuestionBank).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    statement: String,
    level: String,
    estimated_minutes: u32,
    solution: String,
    year: i32,
    body: QuestionBody,
}

impl Question {
    pub(crate) fn from_draft(id: QuestionId, estimated_minutes: u32, draft: QuestionDraft) -> Self {
        Self {
            id,
            statement: draft.statement,
            level: draft.level,
            estimated_minutes,
            solution: draft.solution,
            year: draft.year,
            body: draft.body,
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn statement(&self) -> &str {
        &self.statement
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn estimated_minutes(&self) -> u32 {
        self.estimated_minutes
    }

    pub fn solution(&self) -> &str {
        &self.solution
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn body(&self) -> &QuestionBody {
        &self.body
    }

    pub fn kind(&self) -> QuestionKind {
        self.body.kind()
    }

    /// Build the self-describing record used for console and JSON output.
    pub fn to_record(&self) -> DisplayRecord {
        let details = match &self.body {
            QuestionBody::MultipleChoice {
                options,
                correct_index,
            } => RecordDetails::MultipleChoice {
                options: options
                    .iter()
                    .enumerate()
                    .map(|(i, text)| NumberedOption {
                        number: i + 1,
                        text: text.clone(),
                    })
                    .collect(),
                correct_option: correct_index + 1,
            },
            QuestionBody::TrueFalse { answer } => RecordDetails::TrueFalse {
                answer: if *answer { "Yes" } else { "No" }.to_string(),
            },
        };

        DisplayRecord {
            kind: self.kind(),
            id: self.id,
            statement: self.statement.clone(),
            level: self.level.clone(),
            estimated_minutes: self.estimated_minutes,
            solution: self.solution.clone(),
            year: self.year,
            details,
        }
    }
}

/// Display projection of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub id: QuestionId,
    pub statement: String,
    pub level: String,
    pub estimated_minutes: u32,
    pub solution: String,
    pub year: i32,
    pub details: RecordDetails,
}

/// Variant-specific part of a [`DisplayRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordDetails {
    MultipleChoice {
        options: Vec<NumberedOption>,
        /// 1-based, matching `NumberedOption::number`.
        correct_option: usize,
    },
    TrueFalse {
        /// "Yes" or "No".
        answer: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberedOption {
    pub number: usize,
    pub text: String,
}

impl fmt::Display for DisplayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {} ({})", self.id, self.kind)?;
        writeln!(f, "Statement: {}", self.statement)?;
        writeln!(f, "Level: {} ({} min)", self.level, self.estimated_minutes)?;
        match &self.details {
            RecordDetails::MultipleChoice { options, .. } => {
                writeln!(f, "Options:")?;
                for option in options {
                    writeln!(f, "  {}) {}", option.number, option.text)?;
                }
            }
            RecordDetails::TrueFalse { answer } => {
                writeln!(f, "Answer: {answer}")?;
            }
        }
        writeln!(f, "Solution: {}", self.solution)?;
        writeln!(f, "Year: {}", self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mc() -> Question {
        Question::from_draft(
            QuestionId(1),
            1,
            QuestionDraft::multiple_choice(
                "2+2=?",
                "Recordar",
                "4",
                2025,
                vec!["3".into(), "4".into(), "5".into()],
                1,
            ),
        )
    }

    #[test]
    fn question_id_parse() {
        assert_eq!(" 7 ".parse::<QuestionId>().unwrap(), QuestionId(7));
        assert!("seven".parse::<QuestionId>().is_err());
        assert!("-1".parse::<QuestionId>().is_err());
    }

    #[test]
    fn kind_display() {
        assert_eq!(QuestionKind::MultipleChoice.to_string(), "Multiple Choice");
        assert_eq!(QuestionKind::TrueFalse.to_string(), "True/False");
    }

    #[test]
    fn multiple_choice_record_numbers_options() {
        let record = sample_mc().to_record();
        assert_eq!(record.kind, QuestionKind::MultipleChoice);
        assert_eq!(record.id, QuestionId(1));
        match record.details {
            RecordDetails::MultipleChoice {
                options,
                correct_option,
            } => {
                assert_eq!(options.len(), 3);
                assert_eq!(options[0].number, 1);
                assert_eq!(options[2].text, "5");
                assert_eq!(correct_option, 2);
            }
            other => panic!("unexpected details: {other:?}"),
        }
    }

    #[test]
    fn true_false_record_resolves_answer_text() {
        let yes = Question::from_draft(
            QuestionId(2),
            3,
            QuestionDraft::true_false("Sky is blue", "Aplicar", "Verdadero", 2024, true),
        );
        let no = Question::from_draft(
            QuestionId(3),
            3,
            QuestionDraft::true_false("Fire is cold", "Aplicar", "Falso", 2024, false),
        );
        assert_eq!(
            yes.to_record().details,
            RecordDetails::TrueFalse {
                answer: "Yes".into()
            }
        );
        assert_eq!(
            no.to_record().details,
            RecordDetails::TrueFalse {
                answer: "No".into()
            }
        );
    }

    #[test]
    fn record_text_lists_options() {
        let text = sample_mc().to_record().to_string();
        assert!(text.starts_with("ID: 1 (Multiple Choice)"));
        assert!(text.contains("  2) 4"));
        assert!(text.contains("Solution: 4"));
        assert!(text.contains("Year: 2025"));
    }

    #[test]
    fn true_false_text_shows_answer_and_solution() {
        let q = Question::from_draft(
            QuestionId(5),
            2,
            QuestionDraft::true_false("Sky is blue", "Entender", "Verdadero", 2024, true),
        );
        let text = q.to_record().to_string();
        assert!(text.starts_with("ID: 5 (True/False)"));
        assert!(text.contains("Answer: Yes\n"));
        assert!(text.contains("Solution: Verdadero\n"));
    }

    #[test]
    fn record_json_carries_type_tag() {
        let json = serde_json::to_value(sample_mc().to_record()).unwrap();
        assert_eq!(json["type"], "Multiple Choice");
        assert_eq!(json["details"]["correct_option"], 2);
    }
}
