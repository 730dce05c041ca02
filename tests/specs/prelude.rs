//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the dotstar binary in isolation.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::Command;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use tempfile::TempDir;

/// Returns a Command configured to run the dotstar binary.
pub fn dotstar_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dotstar"));
    cmd.env_remove("DOTSTAR_CONFIG")
        .env_remove("DOTSTAR_DEBUG")
        .env_remove("DOTSTAR_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Returns a Command running the dotstar binary in `dir`.
pub fn dotstar_in(dir: &Path) -> Command {
    let mut cmd = dotstar_cmd();
    cmd.current_dir(dir);
    cmd
}

/// Temp directory that acts as a git root with no config.
pub fn isolated_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

/// Temp git root containing a dotstar.toml with `content`.
pub fn project_with_config(content: &str) -> TempDir {
    let dir = isolated_dir();
    std::fs::write(dir.path().join("dotstar.toml"), content).unwrap();
    dir
}
