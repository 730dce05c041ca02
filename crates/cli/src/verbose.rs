// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose output logger for diagnostic information.
//!
//! Writes the compiled atoms and per-candidate search statistics to stderr.
//! Enabled with `--verbose` or `DOTSTAR_DEBUG=1`.

use crate::pattern::{CompiledPattern, Evaluation};

/// Environment variable that turns verbose output on.
pub const DEBUG_ENV: &str = "DOTSTAR_DEBUG";

/// Verbose output logger. Writes to stderr when enabled.
/// All output is conditional on verbose mode being enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Enabled by the flag, or by `DOTSTAR_DEBUG` set to anything but `0`.
    pub fn from_flag_or_env(flag: bool) -> Self {
        let env = std::env::var(DEBUG_ENV).is_ok_and(|v| !v.is_empty() && v != "0");
        Self::new(flag || env)
    }

    /// Print a verbose line to stderr (indented as content under a section).
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("  {}", msg);
        }
    }

    /// Print a verbose section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("\n{}:", title);
        }
    }

    /// Log the compiled atom sequence.
    pub fn pattern(&self, pattern: &CompiledPattern) {
        if !self.enabled {
            return;
        }
        self.section("Pattern");
        for line in describe_pattern(pattern) {
            self.log(&line);
        }
    }

    /// Log one candidate's search statistics.
    pub fn evaluation(&self, input: &str, eval: &Evaluation) {
        if self.enabled {
            self.log(&describe_evaluation(input, eval));
        }
    }
}

/// One line per atom: index, pattern text, structure.
pub fn describe_pattern(pattern: &CompiledPattern) -> Vec<String> {
    let mut lines: Vec<String> = pattern
        .atoms()
        .iter()
        .enumerate()
        .map(|(i, atom)| format!("{i}: {:<3} {atom:?}", atom.to_string()))
        .collect();
    lines.push(format!("min length: {}", pattern.min_len()));
    lines
}

fn describe_evaluation(input: &str, eval: &Evaluation) -> String {
    if eval.stats.length_rejected {
        format!("{input:?}: {} (rejected on length)", eval.matched)
    } else {
        format!("{input:?}: {} ({} states)", eval.matched, eval.stats.states_visited)
    }
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
