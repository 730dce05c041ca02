// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

use crate::pattern::PatternError;

/// Library-level errors outside the pattern engine itself.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes. Match outcomes never change the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// I/O or other unexpected failure.
    Failure = 1,
    /// Invalid pattern or configuration.
    InvalidInput = 2,
    /// A candidate exceeded the search state limit.
    ResourceLimit = 3,
}

impl ExitCode {
    /// Pick an exit code for an error surfaced to `main`.
    ///
    /// Refused candidates are reported, not propagated, so only library
    /// [`Error`]s select a specific code.
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<Error>() {
            Some(Error::Config { .. } | Error::Pattern(_)) => ExitCode::InvalidInput,
            Some(Error::Io { .. }) | None => ExitCode::Failure,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
