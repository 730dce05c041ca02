// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format output.

use serde_json::json;
use termcolor::WriteColor;

use crate::pattern::CompiledPattern;

use super::{MatchReport, Outcome, ReportFormatter};

/// JSON format report formatter.
pub struct JsonFormatter {
    /// Single-line output instead of pretty-printed.
    pub compact: bool,
}

impl JsonFormatter {
    fn write_value(
        &self,
        writer: &mut dyn WriteColor,
        value: &serde_json::Value,
    ) -> anyhow::Result<()> {
        if self.compact {
            serde_json::to_writer(&mut *writer, value)?;
        } else {
            serde_json::to_writer_pretty(&mut *writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

/// JSON value for a report.
pub(crate) fn report_value(report: &MatchReport) -> serde_json::Value {
    let results: Vec<serde_json::Value> = report
        .results
        .iter()
        .map(|r| match &r.outcome {
            Outcome::Matched(matched) => json!({ "input": r.input, "matched": matched }),
            Outcome::Refused(err) => {
                json!({ "input": r.input, "matched": null, "error": err.to_string() })
            }
        })
        .collect();

    json!({ "pattern": report.pattern, "results": results })
}

/// JSON value for `--explain`.
pub(crate) fn explain_value(pattern: &CompiledPattern) -> serde_json::Value {
    let atoms: Vec<String> = pattern.atoms().iter().map(|a| a.to_string()).collect();
    json!({
        "pattern": pattern.to_string(),
        "atoms": atoms,
        "min_length": pattern.min_len(),
    })
}

impl ReportFormatter for JsonFormatter {
    fn write_report(
        &self,
        writer: &mut dyn WriteColor,
        report: &MatchReport,
    ) -> anyhow::Result<()> {
        self.write_value(writer, &report_value(report))
    }

    fn write_explain(
        &self,
        writer: &mut dyn WriteColor,
        pattern: &CompiledPattern,
    ) -> anyhow::Result<()> {
        self.write_value(writer, &explain_value(pattern))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
