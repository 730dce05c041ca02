// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading from `dotstar.toml`.
//!
//! ```toml
//! version = 1
//!
//! [limits]
//! max_states = 1000000
//!
//! [output]
//! format = "json"
//! color = "never"
//! ```

pub mod defaults;

use std::path::Path;

use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::color::ColorMode;
use crate::error::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config format version (must be 1).
    pub version: i64,

    #[serde(default)]
    pub limits: LimitsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::file::VERSION,
            limits: LimitsConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Search resource limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// Maximum search table size per candidate (0 = unlimited).
    #[serde(default = "LimitsConfig::default_max_states")]
    pub max_states: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { max_states: Self::default_max_states() }
    }
}

impl LimitsConfig {
    pub(crate) fn default_max_states() -> usize {
        defaults::limits::MAX_STATES
    }

    /// Configured limit, or `None` when set to 0.
    pub fn max_states(&self) -> Option<usize> {
        (self.max_states > 0).then_some(self.max_states)
    }
}

/// Output defaults; command-line flags take precedence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub color: ColorMode,
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    let config = parse(&content, path)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Parse config content. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    if config.version != defaults::file::VERSION {
        return Err(Error::Config {
            path: path.to_path_buf(),
            message: format!(
                "unsupported version {} (expected {})",
                config.version,
                defaults::file::VERSION
            ),
        });
    }

    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
