//! quizbank-core — question bank, time estimation and evaluation assembly.
//!
//! This crate defines the question model and the in-memory bank that owns
//! every question, plus the logic that picks questions for a timed
//! evaluation.

pub mod audit;
pub mod bank;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod model;
pub mod taxonomy;

pub use bank::QuestionBank;
pub use config::{load_config_from, OutputFormat, QuizbankConfig};
pub use error::QuizbankError;
pub use evaluation::{Evaluation, EvaluationSummary};
pub use model::{DisplayRecord, Question, QuestionBody, QuestionDraft, QuestionId, QuestionKind};
pub use taxonomy::{estimate_minutes, TaxonomyLevel, DEFAULT_MINUTES};
