//! The interactive menu session.
//!
//! A [`Session`] owns the question bank for the life of the process and
//! reads menu choices and answers from any `BufRead`, so it can be driven
//! by stdin or by a test buffer.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use thiserror::Error;

use quizbank_core::{
    DisplayRecord, OutputFormat, QuestionBank, QuestionId, QuizbankConfig, TaxonomyLevel,
};

/// Raised when the input stream closes in the middle of a prompt.
#[derive(Debug, Error)]
#[error("end of input")]
struct EndOfInput;

const MENU: &str = "
****** Main Menu ******
1. Add question (multiple choice)
2. Add question (true/false)
3. Show all questions
4. Search questions by level
5. Remove question by id
6. Build evaluation
0. Exit
Select an option: ";

pub struct Session<R, W> {
    input: R,
    output: W,
    bank: QuestionBank,
    config: QuizbankConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: QuizbankConfig) -> Self {
        Self {
            input,
            output,
            bank: QuestionBank::new(),
            config,
        }
    }

    #[cfg(test)]
    fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Show the menu until the user picks 0 or input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let choice = match self.prompt(MENU) {
                Ok(choice) => choice,
                Err(e) if e.is::<EndOfInput>() => break,
                Err(e) => return Err(e),
            };

            let outcome = match choice.trim() {
                "1" => self.add_multiple_choice(),
                "2" => self.add_true_false(),
                "3" => self.show_all(),
                "4" => self.search_by_level(),
                "5" => self.remove_question(),
                "6" => self.build_evaluation(),
                "0" => break,
                other => {
                    writeln!(self.output, "Unknown option: {other:?}")?;
                    Ok(())
                }
            };

            match outcome {
                Ok(()) => {}
                Err(e) if e.is::<EndOfInput>() => break,
                Err(e) => return Err(e),
            }
        }

        writeln!(self.output, "\nProgram finished.")?;
        self.output.flush()?;
        Ok(())
    }

    fn add_multiple_choice(&mut self) -> Result<()> {
        let statement = self.prompt("Statement: ")?;
        let level = self.prompt_level()?;
        let solution = self.prompt("Solution: ")?;
        let option_count: usize =
            self.prompt_parsed("Number of options: ", |n: &usize| *n >= 1)?;

        let mut options = Vec::with_capacity(option_count);
        for i in 1..=option_count {
            options.push(self.prompt(&format!("Option {i}: "))?);
        }

        let correct: usize = self.prompt_parsed(
            &format!("Correct option (1 to {option_count}): "),
            |n: &usize| (1..=option_count).contains(n),
        )?;
        let year = self.prompt_year()?;

        let id = self.bank.add_multiple_choice(
            &statement,
            &level,
            &solution,
            year,
            options,
            correct - 1,
        );
        self.report_added(id)
    }

    fn add_true_false(&mut self) -> Result<()> {
        let statement = self.prompt("Statement: ")?;
        let level = self.prompt_level()?;
        let solution = self.prompt("Expected answer (Verdadero/Falso): ")?;
        let answer = parse_true_false(&solution);
        let year = self.prompt_year()?;

        let id = self
            .bank
            .add_true_false(&statement, &level, &solution, year, answer);
        self.report_added(id)
    }

    fn show_all(&mut self) -> Result<()> {
        if self.bank.is_empty() {
            writeln!(self.output, "The bank is empty.")?;
            return Ok(());
        }
        let records = self.bank.display_all();
        self.write_records(&records)
    }

    fn search_by_level(&mut self) -> Result<()> {
        let level = self.prompt_level()?;
        let records = self.bank.display_level(&level);
        if records.is_empty() {
            writeln!(self.output, "No questions found for level {level:?}.")?;
            return Ok(());
        }
        writeln!(self.output, "\nQuestions at level {level:?}:")?;
        self.write_records(&records)
    }

    fn remove_question(&mut self) -> Result<()> {
        let id: QuestionId = self.prompt_parsed("Id of the question to remove: ", |_| true)?;
        if self.bank.remove_by_id(id) {
            writeln!(self.output, "Question removed.")?;
        } else {
            writeln!(self.output, "No question found with id {id}.")?;
        }
        Ok(())
    }

    fn build_evaluation(&mut self) -> Result<()> {
        let subject = self.prompt("Subject: ")?;
        let level = self.prompt_level()?;
        let default_count = self.config.default_count;
        let count = self.prompt_or_default(
            &format!("Number of questions [{default_count}]: "),
            default_count,
        )?;

        let summary =
            self.bank
                .build_evaluation(subject.trim(), &level, count, self.config.current_year);
        if summary.records.len() < count {
            tracing::info!(
                requested = count,
                selected = summary.records.len(),
                "fewer questions than requested"
            );
        }

        let rendered = match self.config.output_format {
            OutputFormat::Text => summary.to_text(),
            OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&summary)?),
            OutputFormat::Markdown => summary.to_markdown(),
        };
        write!(self.output, "{rendered}")?;
        Ok(())
    }

    fn report_added(&mut self, id: QuestionId) -> Result<()> {
        let minutes = self
            .bank
            .get_by_id(id)
            .map(|q| q.estimated_minutes())
            .unwrap_or_default();
        writeln!(self.output, "Question {id} added ({minutes} min).")?;
        Ok(())
    }

    fn write_records(&mut self, records: &[DisplayRecord]) -> Result<()> {
        for record in records {
            writeln!(self.output, "{record}")?;
        }
        Ok(())
    }

    /// Print `label` and read one line without its line ending.
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EndOfInput.into());
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn prompt_level(&mut self) -> Result<String> {
        let names: Vec<&str> = TaxonomyLevel::ALL
            .iter()
            .map(|level| level.spanish_name())
            .collect();
        self.prompt(&format!("Taxonomy level ({}): ", names.join(", ")))
    }

    fn prompt_year(&mut self) -> Result<i32> {
        let current = self.config.current_year;
        self.prompt_or_default(&format!("Year [{current}]: "), current)
    }

    /// Re-prompt until the answer parses and passes `accept`.
    fn prompt_parsed<T: FromStr>(
        &mut self,
        label: &str,
        accept: impl Fn(&T) -> bool,
    ) -> Result<T> {
        loop {
            let answer = self.prompt(label)?;
            match answer.trim().parse::<T>() {
                Ok(value) if accept(&value) => return Ok(value),
                _ => writeln!(self.output, "Invalid value: {:?}", answer.trim())?,
            }
        }
    }

    /// Like [`Self::prompt_parsed`], but an empty answer yields `default`.
    fn prompt_or_default<T: FromStr>(&mut self, label: &str, default: T) -> Result<T> {
        loop {
            let answer = self.prompt(label)?;
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(default);
            }
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Invalid value: {answer:?}")?,
            }
        }
    }
}

/// Resolve a typed true/false solution to its boolean answer.
fn parse_true_false(solution: &str) -> bool {
    matches!(solution.trim(), "Verdadero" | "verdadero" | "True" | "true")
}
