//! Finite automata for regal: Thompson-style NFA construction, subset
//! construction and DFA algebra over a single-byte alphabet.
//!
//! Pipeline:
//! - `nfa` - state arena, primitive fragments and structural combinators
//! - `determinize` - subset construction into a total DFA
//! - `dfa` - simulation, emptiness, witnesses and dumps
//! - `product` - synchronized product of two DFAs (difference, intersection, ...)
//! - `alphabet` - byte sets and the byte classes forming the effective alphabet

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod alphabet;
pub mod determinize;
pub mod dfa;
pub mod nfa;
pub mod product;

mod invariants;

#[cfg(test)]
mod alphabet_tests;

pub use alphabet::{ByteClasses, ByteSet};
pub use determinize::determinize;
pub use dfa::{Cursor, DEAD, Dfa};
pub use nfa::{Fragment, Label, Nfa, NfaBuilder, Transition};
pub use product::SetOp;

use serde::{Deserialize, Serialize};

/// Default for [`Limits::max_states`].
pub const DEFAULT_MAX_STATES: usize = 10_000;

/// Index of a state inside an automaton's arena.
///
/// NFA and DFA states share the representation; an id is only meaningful
/// for the automaton that produced it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StateId(u32);

impl StateId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Create a StateId from a raw index.
    #[inline]
    pub const fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resource limits for automaton construction.
///
/// Subset construction and product construction can blow up exponentially;
/// both stop with [`Error::StateLimitExceeded`] once `max_states` is reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of states in any DFA built (sink included).
    pub max_states: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_states: DEFAULT_MAX_STATES,
        }
    }
}

impl Limits {
    pub fn with_max_states(mut self, max_states: usize) -> Self {
        self.max_states = max_states;
        self
    }
}

/// Errors that can occur while building automata.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Construction produced more states than `Limits::max_states` allows.
    #[error("automaton state limit of {limit} exceeded")]
    StateLimitExceeded { limit: usize },
}

/// Result type for automaton construction.
pub type Result<T> = std::result::Result<T, Error>;
