//! Evaluations assembled from bank questions, and their printable summaries.

use serde::{Deserialize, Serialize};

use crate::bank::QuestionBank;
use crate::model::{DisplayRecord, QuestionId, RecordDetails};

/// A named selection of questions.
///
/// Holds ids only; questions are resolved through the bank that owns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    subject: String,
    question_ids: Vec<QuestionId>,
}

impl Evaluation {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            question_ids: Vec::new(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn question_ids(&self) -> &[QuestionId] {
        &self.question_ids
    }

    /// Append a question. Duplicates are kept.
    pub fn add_question(&mut self, id: QuestionId) {
        self.question_ids.push(id);
    }

    /// Sum of the estimated minutes of every question still in `bank`.
    pub fn total_time(&self, bank: &QuestionBank) -> u32 {
        self.question_ids
            .iter()
            .filter_map(|id| bank.get_by_id(*id))
            .map(|q| q.estimated_minutes())
            .sum()
    }

    pub fn summarize(&self, bank: &QuestionBank) -> EvaluationSummary {
        let records: Vec<DisplayRecord> = self
            .question_ids
            .iter()
            .filter_map(|id| {
                let question = bank.get_by_id(*id);
                if question.is_none() {
                    tracing::debug!(id = %id, "question no longer in bank, skipping");
                }
                question
            })
            .map(|q| q.to_record())
            .collect();

        EvaluationSummary {
            subject: self.subject.clone(),
            total_minutes: records.iter().map(|r| r.estimated_minutes).sum(),
            records,
        }
    }
}

/// Read-only projection of an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub subject: String,
    pub records: Vec<DisplayRecord>,
    pub total_minutes: u32,
}

impl EvaluationSummary {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Plain-text rendering for the console.
    pub fn to_text(&self) -> String {
        let mut out = format!("\nEvaluation: {}\n", self.subject);
        if self.records.is_empty() {
            out.push_str("No questions matched.\n");
        }
        for record in &self.records {
            out.push_str(&record.to_string());
            out.push('\n');
        }
        out.push_str(&format!("Total time: {} minutes\n", self.total_minutes));
        out
    }

    /// Format the evaluation as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = format!("# Evaluation: {}\n\n", self.subject);

        md.push_str(&format!(
            "**Questions:** {} | **Total time:** {} min\n\n",
            self.records.len(),
            self.total_minutes
        ));

        for (i, record) in self.records.iter().enumerate() {
            md.push_str(&format!(
                "## {}. {} ({}, {} min)\n\n",
                i + 1,
                record.statement,
                record.kind,
                record.estimated_minutes
            ));
            md.push_str(&format!(
                "- **Id:** {}\n- **Level:** {}\n- **Year:** {}\n",
                record.id, record.level, record.year
            ));
            match &record.details {
                RecordDetails::MultipleChoice { options, .. } => {
                    md.push('\n');
                    for option in options {
                        md.push_str(&format!("{}. {}\n", option.number, option.text));
                    }
                    md.push_str(&format!("\n**Solution:** {}\n\n", record.solution));
                }
                RecordDetails::TrueFalse { answer } => {
                    md.push_str(&format!(
                        "\n**Answer:** {answer}\n\n**Solution:** {}\n\n",
                        record.solution
                    ));
                }
            }
        }

        md
    }
}
