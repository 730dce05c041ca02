// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match result reporting.
//!
//! Collects per-candidate outcomes and writes them as text or JSON.

mod json;
mod text;

use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::pattern::{CompiledPattern, Evaluation, MatchError};

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Outcome for a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Matched(bool),
    Refused(MatchError),
}

impl From<Result<Evaluation, MatchError>> for Outcome {
    fn from(result: Result<Evaluation, MatchError>) -> Self {
        match result {
            Ok(eval) => Outcome::Matched(eval.matched),
            Err(e) => Outcome::Refused(e),
        }
    }
}

/// A candidate string and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateResult {
    pub input: String,
    pub outcome: Outcome,
}

/// All results for one pattern, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub pattern: String,
    pub results: Vec<CandidateResult>,
}

impl MatchReport {
    pub fn new(pattern: &CompiledPattern) -> Self {
        Self { pattern: pattern.to_string(), results: Vec::new() }
    }

    pub fn push(&mut self, input: String, outcome: Outcome) {
        self.results.push(CandidateResult { input, outcome });
    }

    /// Number of candidates refused by the state limit.
    pub fn refused_count(&self) -> usize {
        self.results.iter().filter(|r| matches!(r.outcome, Outcome::Refused(_))).count()
    }
}

/// Writes reports in one output format.
pub trait ReportFormatter {
    /// Write match results.
    fn write_report(&self, writer: &mut dyn WriteColor, report: &MatchReport)
    -> anyhow::Result<()>;

    /// Write the compiled atoms (`--explain`).
    fn write_explain(
        &self,
        writer: &mut dyn WriteColor,
        pattern: &CompiledPattern,
    ) -> anyhow::Result<()>;
}

/// Formatter for `format`.
pub fn formatter(format: OutputFormat, compact: bool) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter { compact }),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
