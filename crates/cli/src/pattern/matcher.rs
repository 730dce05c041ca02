// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-string acceptance over a compiled pattern.
//!
//! The search walks `(atom index, input index)` states with an explicit
//! worklist. Every state is expanded at most once, so a match costs
//! `O(atoms × input)` time and bits regardless of how many `*`/`+` atoms
//! the pattern has. The visited table is allocated per call.

use super::atom::{Atom, Unit};
use super::compile::CompiledPattern;

/// Resource bounds for a single match call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchLimits {
    /// Largest search table (`(atoms + 1) × (chars + 1)` states) to allocate.
    /// `None` = unlimited.
    pub max_states: Option<usize>,
}

impl MatchLimits {
    pub fn unlimited() -> Self {
        Self { max_states: None }
    }

    pub fn with_max_states(max_states: usize) -> Self {
        Self { max_states: Some(max_states) }
    }
}

/// Raised only by bounded matching; a non-match is never an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("search requires {required} states, exceeding the limit of {limit}")]
    StateLimit { required: usize, limit: usize },
}

/// Counters collected during one match call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Distinct states expanded.
    pub states_visited: usize,
    /// Rejected on length alone, without searching.
    pub length_rejected: bool,
}

/// Result of a match call with its statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub matched: bool,
    pub stats: SearchStats,
}

impl CompiledPattern {
    /// Whether the whole of `input` is accepted.
    pub fn matches(&self, input: &str) -> bool {
        let chars: Vec<char> = input.chars().collect();
        self.run(&chars).matched
    }

    /// Like [`matches`](Self::matches), but refuses searches larger than
    /// `limits` allows.
    pub fn matches_within(&self, input: &str, limits: &MatchLimits) -> Result<bool, MatchError> {
        self.evaluate(input, limits).map(|eval| eval.matched)
    }

    /// Bounded match that also reports search statistics.
    pub fn evaluate(&self, input: &str, limits: &MatchLimits) -> Result<Evaluation, MatchError> {
        let chars: Vec<char> = input.chars().collect();
        if !self.rejects_length(chars.len())
            && let Some(limit) = limits.max_states
        {
            let required = state_count(self.len(), chars.len());
            if required > limit {
                tracing::debug!(required, limit, "match refused by state limit");
                return Err(MatchError::StateLimit { required, limit });
            }
        }
        Ok(self.run(&chars))
    }

    fn run(&self, input: &[char]) -> Evaluation {
        if self.rejects_length(input.len()) {
            tracing::trace!(input_len = input.len(), min_len = self.min_len(), "length reject");
            return Evaluation {
                matched: false,
                stats: SearchStats { states_visited: 0, length_rejected: true },
            };
        }
        Search::new(self.atoms(), input).run()
    }
}

/// Free-function form of [`CompiledPattern::matches`].
pub fn matches(pattern: &CompiledPattern, input: &str) -> bool {
    pattern.matches(input)
}

/// Size of the `(atom, position)` state space, saturating on overflow.
fn state_count(atoms: usize, chars: usize) -> usize {
    atoms.saturating_add(1).saturating_mul(chars.saturating_add(1))
}

struct Search<'a> {
    atoms: &'a [Atom],
    input: &'a [char],
    visited: StateSet,
    worklist: Vec<(usize, usize)>,
    states_visited: usize,
}

impl<'a> Search<'a> {
    fn new(atoms: &'a [Atom], input: &'a [char]) -> Self {
        Self {
            atoms,
            input,
            visited: StateSet::new(state_count(atoms.len(), input.len())),
            worklist: Vec::new(),
            states_visited: 0,
        }
    }

    fn run(mut self) -> Evaluation {
        let matched = self.search();
        tracing::trace!(states = self.states_visited, matched, "search finished");
        Evaluation {
            matched,
            stats: SearchStats { states_visited: self.states_visited, length_rejected: false },
        }
    }

    fn search(&mut self) -> bool {
        self.push(0, 0);

        while let Some((seq, pos)) = self.worklist.pop() {
            let Some(&atom) = self.atoms.get(seq) else {
                if pos == self.input.len() {
                    return true;
                }
                continue;
            };
            let here = self.input.get(pos).copied();

            // Pushes are in reverse of the order branches should be tried.
            match atom {
                Atom::Any | Atom::Literal(_) => {
                    if accepts(atom.unit(), here) {
                        self.push(seq + 1, pos + 1);
                    }
                }
                Atom::ZeroOrMore(unit) => {
                    if accepts(unit, here) {
                        self.push(seq, pos + 1);
                    }
                    self.push(seq + 1, pos);
                }
                Atom::OneOrMore(unit) => {
                    if accepts(unit, here) {
                        self.push(seq + 1, pos + 1);
                        self.push(seq, pos + 1);
                    }
                }
            }
        }
        false
    }

    fn push(&mut self, seq: usize, pos: usize) {
        let index = seq * (self.input.len() + 1) + pos;
        if self.visited.insert(index) {
            self.states_visited += 1;
            self.worklist.push((seq, pos));
        }
    }
}

#[inline]
fn accepts(unit: Unit, ch: Option<char>) -> bool {
    ch.is_some_and(|c| unit.accepts(c))
}

/// Fixed-size bitset of visited states.
struct StateSet {
    words: Vec<u64>,
}

impl StateSet {
    fn new(len: usize) -> Self {
        Self { words: vec![0; len.div_ceil(64)] }
    }

    /// Mark `index` visited. Returns false if it already was.
    fn insert(&mut self, index: usize) -> bool {
        let mask = 1u64 << (index % 64);
        match self.words.get_mut(index / 64) {
            Some(word) if *word & mask == 0 => {
                *word |= mask;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
