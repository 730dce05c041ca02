// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format output: one `true`/`false` line per candidate.

use termcolor::WriteColor;

use crate::color::{outcome_spec, scheme};
use crate::pattern::CompiledPattern;

use super::{MatchReport, Outcome, ReportFormatter};

/// Text format report formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn write_report(
        &self,
        writer: &mut dyn WriteColor,
        report: &MatchReport,
    ) -> anyhow::Result<()> {
        for result in &report.results {
            match &result.outcome {
                Outcome::Matched(matched) => {
                    writer.set_color(&outcome_spec(*matched))?;
                    write!(writer, "{matched}")?;
                }
                Outcome::Refused(_) => {
                    // Details go to stderr; keep one stdout line per candidate.
                    writer.set_color(&scheme::error())?;
                    write!(writer, "error")?;
                }
            }
            writer.reset()?;
            writeln!(writer)?;
        }
        Ok(())
    }

    fn write_explain(
        &self,
        writer: &mut dyn WriteColor,
        pattern: &CompiledPattern,
    ) -> anyhow::Result<()> {
        for (i, atom) in pattern.atoms().iter().enumerate() {
            writer.set_color(&scheme::index())?;
            write!(writer, "{i}")?;
            writer.reset()?;
            writeln!(writer, ": {:<3} {atom:?}", atom.to_string())?;
        }
        writeln!(writer, "min length: {}", pattern.min_len())?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
