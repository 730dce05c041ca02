// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_match;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dotstar::cli::Cli;
use dotstar::error::ExitCode;

/// Environment variable holding the tracing filter (e.g. `DOTSTAR_LOG=debug`).
const LOG_ENV: &str = "DOTSTAR_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> std::process::ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match cmd_match::run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::for_error(&err).into()
        }
    }
}
