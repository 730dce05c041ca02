// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled match atoms.

use std::fmt;

/// A single-character match rule. The only thing a quantifier can wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// `.`: any one character.
    Any,
    /// A literal character.
    Literal(char),
}

impl Unit {
    /// Whether this unit accepts `ch`.
    #[inline]
    pub fn accepts(self, ch: char) -> bool {
        match self {
            Unit::Any => true,
            Unit::Literal(expected) => expected == ch,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Any => f.write_str("."),
            Unit::Literal(c) => write!(f, "{c}"),
        }
    }
}

/// One compiled unit of a pattern, optionally quantified.
///
/// Quantifiers wrap a [`Unit`], so `ZeroOrMore(OneOrMore(..))` cannot be
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Atom {
    /// `.`
    Any,
    /// `c`
    Literal(char),
    /// `x*`
    ZeroOrMore(Unit),
    /// `x+`
    OneOrMore(Unit),
}

impl Atom {
    /// The single-character rule this atom applies.
    pub fn unit(self) -> Unit {
        match self {
            Atom::Any => Unit::Any,
            Atom::Literal(c) => Unit::Literal(c),
            Atom::ZeroOrMore(unit) | Atom::OneOrMore(unit) => unit,
        }
    }

    /// Whether the atom carries a `*` or `+` suffix.
    pub fn is_quantified(self) -> bool {
        matches!(self, Atom::ZeroOrMore(_) | Atom::OneOrMore(_))
    }

    /// Minimum number of input characters this atom consumes.
    pub fn min_width(self) -> usize {
        match self {
            Atom::ZeroOrMore(_) => 0,
            _ => 1,
        }
    }
}

impl From<Unit> for Atom {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Any => Atom::Any,
            Unit::Literal(c) => Atom::Literal(c),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Any | Atom::Literal(_) => write!(f, "{}", self.unit()),
            Atom::ZeroOrMore(unit) => write!(f, "{unit}*"),
            Atom::OneOrMore(unit) => write!(f, "{unit}+"),
        }
    }
}

#[cfg(test)]
#[path = "atom_tests.rs"]
mod tests;
