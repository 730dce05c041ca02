// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compilation and whole-string matching.
//!
//! Supported syntax:
//! - ASCII literal: matches itself
//! - `.`: matches any single character
//! - `*` / `+`: zero-or-more / one-or-more of the preceding atom
//!
//! A pattern is compiled once into a [`CompiledPattern`] and can then be
//! matched against any number of inputs.

pub mod atom;
pub mod compile;
pub mod matcher;

pub use atom::{Atom, Unit};
pub use compile::{CompiledPattern, PatternError, compile};
pub use matcher::{Evaluation, MatchError, MatchLimits, SearchStats, matches};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
