// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match command: compile the pattern, then report each candidate.

use std::io::{BufRead, Write};

use anyhow::Context;
use clap::CommandFactory;
use termcolor::{StandardStream, WriteColor};

use dotstar::cli::Cli;
use dotstar::config::{self, Config};
use dotstar::discovery;
use dotstar::error::{Error, ExitCode};
use dotstar::pattern::compile;
use dotstar::report::{self, MatchReport, Outcome};
use dotstar::verbose::VerboseLogger;

/// Run the match command.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "dotstar", &mut std::io::stdout());
        return Ok(ExitCode::Success);
    }

    let config = load_config(cli)?;
    let settings = cli.settings(&config);
    let verbose = VerboseLogger::from_flag_or_env(cli.verbose);

    let source = cli.pattern.as_deref().context("missing pattern")?;
    let pattern = compile(source).map_err(Error::from).context("invalid pattern")?;
    verbose.pattern(&pattern);

    let formatter = report::formatter(settings.format, cli.compact);
    let mut stdout = StandardStream::stdout(settings.color);

    if cli.explain {
        formatter.write_explain(&mut stdout, &pattern)?;
        stdout.flush()?;
        return Ok(ExitCode::Success);
    }

    let inputs = if cli.inputs.is_empty() { read_stdin_lines()? } else { cli.inputs.clone() };

    verbose.section("Candidates");
    let mut report = MatchReport::new(&pattern);
    for input in inputs {
        let result = pattern.evaluate(&input, &settings.limits);
        match &result {
            Ok(eval) => verbose.evaluation(&input, eval),
            Err(err) => eprintln!("error: {input:?}: {err}"),
        }
        report.push(input, Outcome::from(result));
    }

    formatter.write_report(&mut stdout, &report)?;
    stdout.reset()?;
    stdout.flush()?;

    if report.refused_count() > 0 { Ok(ExitCode::ResourceLimit) } else { Ok(ExitCode::Success) }
}

/// Load the explicit config, the discovered one, or defaults.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => discovery::find_config(&std::env::current_dir()?),
    };
    match path {
        Some(path) => Ok(config::load(&path)?),
        None => Ok(Config::default()),
    }
}

/// Candidates from stdin, one per line.
fn read_stdin_lines() -> anyhow::Result<Vec<String>> {
    let stdin = std::io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read candidates from stdin")?;
        lines.push(line.trim_end_matches('\r').to_string());
    }
    Ok(lines)
}
