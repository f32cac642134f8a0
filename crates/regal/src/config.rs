//! Cache configuration.

use serde::{Deserialize, Serialize};

use regal_automata::Limits;

pub const DEFAULT_MAX_DFA_STATES: usize = regal_automata::DEFAULT_MAX_STATES;

/// Each nesting level costs a handful of parser frames; this depth fits a
/// 2 MiB thread stack in unoptimized builds.
pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

/// Tunables for a [`PatternCache`](crate::PatternCache).
///
/// Missing fields deserialize to their defaults, so the struct can be
/// embedded in a host application's own configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Upper bound on states per DFA, for subset and product construction.
    pub max_dfa_states: usize,
    /// Maximum group nesting depth accepted by the parser.
    pub recursion_limit: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_dfa_states: DEFAULT_MAX_DFA_STATES,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl CacheConfig {
    pub fn limits(&self) -> Limits {
        Limits::default().with_max_states(self.max_dfa_states)
    }
}
