//! The question bank: sole owner of every question.

use std::collections::BTreeMap;

use crate::audit::audit_question;
use crate::evaluation::{Evaluation, EvaluationSummary};
use crate::model::{DisplayRecord, Question, QuestionDraft, QuestionId};
use crate::taxonomy::estimate_minutes;

/// In-memory question repository.
///
/// Ids are handed out in increasing order and never reused, so iterating the
/// map by key yields questions in insertion order.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: BTreeMap<QuestionId, Question>,
    next_id: u32,
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionBank {
    pub fn new() -> Self {
        Self {
            questions: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// The id the next inserted question will receive.
    pub fn next_id(&self) -> QuestionId {
        QuestionId(self.next_id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Store a new question and return its id.
    ///
    /// The time estimate is derived from the level name. Nothing is rejected;
    /// suspicious input is logged as a warning.
    pub fn add(&mut self, draft: QuestionDraft) -> QuestionId {
        let id = QuestionId(self.next_id);
        self.next_id += 1;

        let minutes = estimate_minutes(&draft.level);
        let question = Question::from_draft(id, minutes, draft);

        for warning in audit_question(&question) {
            tracing::warn!("{warning}");
        }
        tracing::debug!(
            id = %id,
            kind = %question.kind(),
            taxonomy_level = question.level(),
            minutes,
            "question added"
        );

        self.questions.insert(id, question);
        id
    }

    pub fn add_multiple_choice(
        &mut self,
        statement: &str,
        level: &str,
        solution: &str,
        year: i32,
        options: Vec<String>,
        correct_index: usize,
    ) -> QuestionId {
        self.add(QuestionDraft::multiple_choice(
            statement,
            level,
            solution,
            year,
            options,
            correct_index,
        ))
    }

    pub fn add_true_false(
        &mut self,
        statement: &str,
        level: &str,
        solution: &str,
        year: i32,
        answer: bool,
    ) -> QuestionId {
        self.add(QuestionDraft::true_false(statement, level, solution, year, answer))
    }

    /// Remove a question. Returns `false` when no question has this id.
    pub fn remove_by_id(&mut self, id: QuestionId) -> bool {
        let removed = self.questions.remove(&id).is_some();
        tracing::debug!(id = %id, removed, "remove question");
        removed
    }

    pub fn get_by_id(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(&id)
    }

    /// All questions in insertion order.
    pub fn list_all(&self) -> impl Iterator<Item = &Question> + '_ {
        self.questions.values()
    }

    /// Questions whose level equals `level` exactly (case-sensitive).
    pub fn filter_by_level<'a>(
        &'a self,
        level: &'a str,
    ) -> impl Iterator<Item = &'a Question> + 'a {
        self.questions.values().filter(move |q| q.level() == level)
    }

    /// First `count` questions at `level`, skipping those from the year
    /// before `current_year`.
    pub fn select_for_evaluation(
        &self,
        level: &str,
        count: usize,
        current_year: i32,
    ) -> Vec<&Question> {
        // No year precedes i32::MIN, so nothing is excluded there.
        let excluded_year = current_year.checked_sub(1);
        let selected: Vec<&Question> = self
            .questions
            .values()
            .filter(|q| q.level() == level && excluded_year != Some(q.year()))
            .take(count)
            .collect();

        tracing::debug!(
            taxonomy_level = level,
            requested = count,
            selected = selected.len(),
            excluded_year = ?excluded_year,
            "selected questions for evaluation"
        );
        selected
    }

    pub fn display_all(&self) -> Vec<DisplayRecord> {
        self.list_all().map(Question::to_record).collect()
    }

    pub fn display_level(&self, level: &str) -> Vec<DisplayRecord> {
        self.filter_by_level(level).map(Question::to_record).collect()
    }

    /// Select questions and summarize them as a named evaluation.
    pub fn build_evaluation(
        &self,
        subject: &str,
        level: &str,
        count: usize,
        current_year: i32,
    ) -> EvaluationSummary {
        let mut evaluation = Evaluation::new(subject);
        for question in self.select_for_evaluation(level, count, current_year) {
            evaluation.add_question(question.id());
        }
        evaluation.summarize(self)
    }
}
