//! Non-fatal checks on questions.
//!
//! The bank accepts every question it is given. These checks only surface
//! the inputs that are accepted silently: unknown level names, which fall
//! back to the default time estimate, and option indices that point past
//! the option list.

use std::fmt;

use crate::model::{Question, QuestionBody, QuestionId};
use crate::taxonomy::{TaxonomyLevel, DEFAULT_MINUTES};

/// A warning raised by [`audit_question`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditWarning {
    pub question_id: QuestionId,
    pub kind: AuditKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditKind {
    UnrecognizedLevel { level: String },
    NoOptions,
    CorrectIndexOutOfRange { index: usize, option_count: usize },
}

impl fmt::Display for AuditWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AuditKind::UnrecognizedLevel { level } => write!(
                f,
                "question {}: unrecognized taxonomy level {level:?}, using default of {DEFAULT_MINUTES} min",
                self.question_id
            ),
            AuditKind::NoOptions => {
                write!(f, "question {}: multiple choice without options", self.question_id)
            }
            AuditKind::CorrectIndexOutOfRange {
                index,
                option_count,
            } => write!(
                f,
                "question {}: correct option index {index} is out of range for {option_count} option(s)",
                self.question_id
            ),
        }
    }
}

/// Check a question for inputs the bank accepts without complaint.
pub fn audit_question(question: &Question) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();
    let id = question.id();

    if TaxonomyLevel::from_name(question.level()).is_none() {
        warnings.push(AuditWarning {
            question_id: id,
            kind: AuditKind::UnrecognizedLevel {
                level: question.level().to_string(),
            },
        });
    }

    if let QuestionBody::MultipleChoice {
        options,
        correct_index,
    } = question.body()
    {
        if options.is_empty() {
            warnings.push(AuditWarning {
                question_id: id,
                kind: AuditKind::NoOptions,
            });
        }
        if *correct_index >= options.len() {
            warnings.push(AuditWarning {
                question_id: id,
                kind: AuditKind::CorrectIndexOutOfRange {
                    index: *correct_index,
                    option_count: options.len(),
                },
            });
        }
    }

    warnings
}
