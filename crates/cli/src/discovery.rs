// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Each ancestor of the start directory is checked for `dotstar.toml`, then
//! `.dotstar.toml`. The search ends at the first directory holding a `.git`
//! entry (directory or worktree file).

use std::path::{Path, PathBuf};

use crate::config::defaults;

/// Find the nearest config file at or above `start_dir`, bounded by the git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        if let Some(path) = config_in(dir) {
            tracing::debug!(path = %path.display(), "discovered config");
            return Some(path);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Config file directly inside `dir`, by name priority.
fn config_in(dir: &Path) -> Option<PathBuf> {
    defaults::file::NAMES.iter().map(|name| dir.join(name)).find(|path| path.is_file())
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
