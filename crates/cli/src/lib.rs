// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! dotstar: a minimal whole-string regular expression matcher.
//!
//! ```
//! let pattern = dotstar::compile("a*4.+hi").unwrap();
//! assert!(pattern.matches("aaaaaa4uhi"));
//! assert!(!pattern.matches("4hi"));
//! ```

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod pattern;
pub mod report;
pub mod verbose;

#[cfg(test)]
pub mod test_utils;

pub use pattern::{
    Atom, CompiledPattern, Evaluation, MatchError, MatchLimits, PatternError, SearchStats, Unit,
    compile, matches,
};
