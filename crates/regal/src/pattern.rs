//! Compiled patterns.
//!
//! A [`Pattern`] owns its NFA and DFA and is immutable once built, apart from
//! the write-once literal marker. Patterns are shared through [`Arc`] and are
//! only ever constructed by a [`PatternCache`], which guarantees one object per
//! pattern text.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use regal_automata::{Dfa, Nfa};

use crate::{PatternCache, Result};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a pattern, unique across every cache in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatternId(u64);

impl PatternId {
    pub(crate) fn fresh() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub struct Pattern {
    id: PatternId,
    text: String,
    nfa: Nfa,
    dfa: Dfa,
    literal: OnceLock<String>,
}

impl Pattern {
    pub(crate) fn new(id: PatternId, text: String, nfa: Nfa, dfa: Dfa) -> Self {
        Self {
            id,
            text,
            nfa,
            dfa,
            literal: OnceLock::new(),
        }
    }

    /// Whether the whole of `input` is in the pattern's language.
    pub fn matches(&self, input: impl AsRef<[u8]>) -> bool {
        self.dfa.matches(input)
    }

    pub fn id(&self) -> PatternId {
        self.id
    }

    /// The pattern text this object was compiled from.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the pattern was created from literal text.
    pub fn is_literal(&self) -> bool {
        self.literal.get().is_some()
    }

    /// The unescaped text of a literal pattern.
    pub fn literal(&self) -> Option<&str> {
        self.literal.get().map(String::as_str)
    }

    /// Record the unescaped text. The first recorded text is kept.
    pub(crate) fn mark_literal(&self, text: &str) {
        self.literal.get_or_init(|| text.to_owned());
    }

    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    /// Whether the empty string is in the language.
    pub fn accepts_empty(&self) -> bool {
        self.dfa.is_accept(self.dfa.start())
    }

    /// Whether the language has no strings at all.
    pub fn is_empty_language(&self) -> bool {
        self.dfa.is_empty_language()
    }

    /// `self` followed by `other`. See [`PatternCache::concatenate`].
    pub fn concatenate(
        self: &Arc<Self>,
        other: &Arc<Pattern>,
        cache: &PatternCache,
    ) -> Result<Arc<Pattern>> {
        cache.concatenate(self, other)
    }

    /// `self` or `other`. See [`PatternCache::union`].
    pub fn union(
        self: &Arc<Self>,
        other: &Arc<Pattern>,
        cache: &PatternCache,
    ) -> Result<Arc<Pattern>> {
        cache.union(self, other)
    }

    pub fn is_sublanguage_of(&self, other: &Pattern, cache: &PatternCache) -> Result<bool> {
        cache.is_sublanguage(self, other)
    }

    pub fn is_equivalent_to(&self, other: &Pattern, cache: &PatternCache) -> Result<bool> {
        cache.is_equivalent(self, other)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("literal", &self.literal())
            .field("dfa_states", &self.dfa.len())
            .finish()
    }
}
