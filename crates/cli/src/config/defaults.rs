// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Config structs delegate to these constants via their `default_*` methods.

/// Config file location.
pub mod file {
    /// Names searched for by discovery, highest priority first.
    pub const NAMES: &[&str] = &["dotstar.toml", ".dotstar.toml"];

    /// The only supported config `version`.
    pub const VERSION: i64 = 1;
}

/// Search resource limits.
pub mod limits {
    /// Default maximum search table size (16M states, ~2 MiB of visited bits).
    pub const MAX_STATES: usize = 1 << 24;
}
