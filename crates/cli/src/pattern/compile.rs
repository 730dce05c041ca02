// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass pattern compiler.

use std::fmt;
use std::str::FromStr;

use super::atom::{Atom, Unit};

/// Errors raised while compiling a pattern.
///
/// Positions are 0-based character offsets into the pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// A non-ASCII character.
    #[error("unsupported character {ch:?} at position {position}")]
    UnsupportedChar { ch: char, position: usize },

    /// `*` or `+` at the start of the pattern or right after another quantifier.
    #[error("quantifier '{quantifier}' at position {position} has no preceding atom")]
    DanglingQuantifier { quantifier: char, position: usize },
}

impl PatternError {
    /// Character offset of the offending character.
    pub fn position(&self) -> usize {
        match self {
            PatternError::UnsupportedChar { position, .. }
            | PatternError::DanglingQuantifier { position, .. } => *position,
        }
    }
}

/// An immutable, reusable sequence of atoms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    atoms: Box<[Atom]>,
    /// Shortest input that can possibly be accepted.
    min_len: usize,
    /// Set when no atom is quantified: the only accepted length.
    exact_len: Option<usize>,
}

impl CompiledPattern {
    fn new(atoms: Vec<Atom>) -> Self {
        let min_len = atoms.iter().map(|a| a.min_width()).sum();
        let quantified = atoms.iter().any(|a| a.is_quantified());
        let exact_len = (!quantified).then_some(atoms.len());
        Self { atoms: atoms.into_boxed_slice(), min_len, exact_len }
    }

    /// Atoms in pattern order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Number of atoms (base characters in the source pattern).
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Minimum number of characters an accepted input must have.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Returns true when an input of `input_len` characters cannot be accepted.
    pub(crate) fn rejects_length(&self, input_len: usize) -> bool {
        match self.exact_len {
            Some(exact) => input_len != exact,
            None => input_len < self.min_len,
        }
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for atom in self.atoms.iter() {
            write!(f, "{atom}")?;
        }
        Ok(())
    }
}

impl FromStr for CompiledPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile(s)
    }
}

/// Compile `pattern` into a [`CompiledPattern`].
///
/// Each base character (`.` or an ASCII literal) becomes one atom; a `*`
/// or `+` directly after it wraps that atom instead of adding a new one.
pub fn compile(pattern: &str) -> Result<CompiledPattern, PatternError> {
    let mut atoms = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars().enumerate().peekable();

    while let Some((position, ch)) = chars.next() {
        let unit = match ch {
            '.' => Unit::Any,
            '*' | '+' => {
                return Err(PatternError::DanglingQuantifier { quantifier: ch, position });
            }
            c if c.is_ascii() => Unit::Literal(c),
            c => return Err(PatternError::UnsupportedChar { ch: c, position }),
        };

        let atom = match chars.peek() {
            Some((_, '*')) => {
                chars.next();
                Atom::ZeroOrMore(unit)
            }
            Some((_, '+')) => {
                chars.next();
                Atom::OneOrMore(unit)
            }
            _ => Atom::from(unit),
        };
        atoms.push(atom);
    }

    tracing::debug!(pattern, atoms = atoms.len(), "compiled pattern");
    Ok(CompiledPattern::new(atoms))
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
