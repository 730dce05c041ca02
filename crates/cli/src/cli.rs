// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

use crate::color::{ColorMode, resolve_color};
use crate::config::Config;
use crate::pattern::MatchLimits;

/// Match whole strings against a minimal regular expression (literals, '.', '*', '+')
#[derive(Parser)]
#[command(name = "dotstar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Pattern to compile
    #[arg(value_name = "PATTERN", required_unless_present = "completions")]
    pub pattern: Option<String>,

    /// Candidate strings (read from stdin, one per line, when omitted)
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "DOTSTAR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long)]
    pub output: Option<OutputFormat>,

    /// Color output mode
    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Maximum search states per candidate (0 = unlimited)
    #[arg(long, value_name = "N")]
    pub max_states: Option<usize>,

    /// Disable the search state limit
    #[arg(long, conflicts_with = "max_states")]
    pub no_limit: bool,

    /// Compact JSON output (single line)
    #[arg(long)]
    pub compact: bool,

    /// Print the compiled atoms and exit
    #[arg(long)]
    pub explain: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completions
    #[arg(long, hide = true, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Effective settings after merging flags over config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub color: termcolor::ColorChoice,
    pub limits: MatchLimits,
}

impl Cli {
    /// Merge command-line flags over config values.
    pub fn settings(&self, config: &Config) -> Settings {
        let format = self.output.unwrap_or(config.output.format);
        let color = match format {
            OutputFormat::Json => termcolor::ColorChoice::Never,
            OutputFormat::Text => {
                resolve_color(self.color.unwrap_or(config.output.color), self.no_color)
            }
        };
        Settings { format, color, limits: self.limits(config) }
    }

    fn limits(&self, config: &Config) -> MatchLimits {
        if self.no_limit {
            return MatchLimits::unlimited();
        }
        match self.max_states {
            Some(0) => MatchLimits::unlimited(),
            Some(n) => MatchLimits::with_max_states(n),
            None => MatchLimits { max_states: config.limits.max_states() },
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
