//! regal: regular patterns over a byte alphabet, compiled to DFAs, with a
//! canonicalizing cache and language algebra (sublanguage, equivalence).
//!
//! # Example
//!
//! ```
//! use regal::PatternCache;
//!
//! let cache = PatternCache::new();
//! let digits = cache.create("[0-9]+").unwrap();
//! let small = cache.create("[0-4]").unwrap();
//!
//! assert!(digits.matches("2024"));
//! assert!(small.is_sublanguage_of(&digits, &cache).unwrap());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod cache;
pub mod config;
pub mod escape;
pub mod parser;
pub mod pattern;

#[cfg(test)]
mod escape_tests;
#[cfg(test)]
mod pattern_tests;

pub use cache::{CacheBuilder, PatternCache};
pub use config::CacheConfig;
pub use escape::escape;
pub use parser::{SyntaxError, SyntaxErrorKind};
pub use pattern::{Pattern, PatternId};
pub use regal_automata::Limits;

/// Errors that can occur while compiling or relating patterns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Malformed pattern text.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// A character outside 7-bit ASCII in pattern text or a literal.
    #[error("unsupported character {ch:?} at offset {offset} (only 7-bit ASCII is allowed)")]
    UnsupportedCharacter { ch: char, offset: usize },

    /// Groups nested deeper than the configured recursion limit.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    /// Automaton construction ran into its state limit.
    #[error(transparent)]
    Automata(#[from] regal_automata::Error),
}

/// Result type for pattern operations.
pub type Result<T> = std::result::Result<T, Error>;
