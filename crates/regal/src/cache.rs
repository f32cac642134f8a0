//! Canonicalizing pattern cache.
//!
//! The cache maps pattern text to a single shared [`Pattern`] and memoizes
//! sublanguage answers by the ordered pair of pattern ids. Ids are unique
//! process-wide, so patterns from another cache can be related too. Both
//! maps only grow.
//!
//! Compilation runs outside the locks. When two threads compile the same
//! text concurrently, the first insert wins and every caller gets that object.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use regal_automata::{Limits, determinize};

use crate::Result;
use crate::config::CacheConfig;
use crate::escape::escape;
use crate::parser;
use crate::pattern::{Pattern, PatternId};

/// Builder for [`PatternCache`].
#[derive(Debug, Clone, Default)]
pub struct CacheBuilder {
    config: CacheConfig,
}

impl CacheBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_dfa_states(mut self, max_states: usize) -> Self {
        self.config.max_dfa_states = max_states;
        self
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.config.recursion_limit = limit;
        self
    }

    pub fn with_config(mut self, config: CacheConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> PatternCache {
        PatternCache::with_config(self.config)
    }
}

pub struct PatternCache {
    config: CacheConfig,
    limits: Limits,
    patterns: RwLock<HashMap<String, Arc<Pattern>>>,
    relations: Mutex<HashMap<(PatternId, PatternId), bool>>,
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::with_config(CacheConfig::default())
    }
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> CacheBuilder {
        CacheBuilder::new()
    }

    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            limits: config.limits(),
            config,
            patterns: RwLock::new(HashMap::new()),
            relations: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// The canonical pattern for `text`, compiling it on first use.
    pub fn create(&self, text: &str) -> Result<Arc<Pattern>> {
        if let Some(pattern) = self.lookup(text) {
            log::trace!("pattern cache hit for {text:?}");
            return Ok(pattern);
        }

        let compiled = Arc::new(self.compile(text)?);

        let mut patterns = self.patterns.write().unwrap_or_else(PoisonError::into_inner);
        let pattern = match patterns.entry(text.to_owned()) {
            Entry::Occupied(entry) => {
                log::trace!("pattern {text:?} was inserted concurrently, keeping the first");
                Arc::clone(entry.get())
            }
            Entry::Vacant(entry) => Arc::clone(entry.insert(compiled)),
        };

        Ok(pattern)
    }

    /// The pattern matching exactly `text`.
    ///
    /// Metacharacters are escaped; the result is the same object as creating
    /// the escaped text directly, now marked literal.
    pub fn literal(&self, text: &str) -> Result<Arc<Pattern>> {
        let escaped = escape(text)?;
        let pattern = self.create(&escaped)?;
        pattern.mark_literal(text);
        Ok(pattern)
    }

    /// The pattern matching every string.
    pub fn any_string(&self) -> Result<Arc<Pattern>> {
        self.create(".*")
    }

    /// `a` followed by `b`. The empty pattern is the identity on either side.
    pub fn concatenate(&self, a: &Arc<Pattern>, b: &Arc<Pattern>) -> Result<Arc<Pattern>> {
        if a.text().is_empty() {
            return Ok(Arc::clone(b));
        }
        if b.text().is_empty() {
            return Ok(Arc::clone(a));
        }
        self.create(&format!("({})({})", a.text(), b.text()))
    }

    /// `a` or `b`.
    ///
    /// An empty operand makes the other optional, which is the other itself
    /// when it already accepts the empty string.
    pub fn union(&self, a: &Arc<Pattern>, b: &Arc<Pattern>) -> Result<Arc<Pattern>> {
        if a.text().is_empty() {
            return self.optional(b);
        }
        if b.text().is_empty() {
            return self.optional(a);
        }
        self.create(&format!("({})|({})", a.text(), b.text()))
    }

    fn optional(&self, pattern: &Arc<Pattern>) -> Result<Arc<Pattern>> {
        if pattern.accepts_empty() {
            return Ok(Arc::clone(pattern));
        }
        self.create(&format!("({})?", pattern.text()))
    }

    /// Whether every string of `a` is also in `b`.
    pub fn is_sublanguage(&self, a: &Pattern, b: &Pattern) -> Result<bool> {
        if a.id() == b.id() {
            return Ok(true);
        }
        if let Some(text) = a.literal() {
            return Ok(b.matches(text));
        }

        let key = (a.id(), b.id());
        if let Some(&known) = self.relations().get(&key) {
            log::trace!("relation memo hit for {} <= {}", a.id(), b.id());
            return Ok(known);
        }

        log::trace!("relation memo miss for {} <= {}", a.id(), b.id());
        let answer = a.dfa().is_subset_of(b.dfa(), &self.limits)?;
        self.relations().insert(key, answer);
        Ok(answer)
    }

    /// Whether `a` and `b` denote the same language.
    pub fn is_equivalent(&self, a: &Pattern, b: &Pattern) -> Result<bool> {
        if a.id() == b.id() {
            return Ok(true);
        }
        Ok(self.is_sublanguage(a, b)? && self.is_sublanguage(b, a)?)
    }

    /// A shortest string in `a` but not in `b`, or `None` when `a` is a
    /// sublanguage of `b`.
    pub fn counterexample(&self, a: &Pattern, b: &Pattern) -> Result<Option<Vec<u8>>> {
        let difference = a.dfa().difference(b.dfa(), &self.limits)?;
        Ok(difference.shortest_member())
    }

    /// Number of distinct pattern texts compiled.
    pub fn len(&self) -> usize {
        self.patterns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of memoized sublanguage answers.
    pub fn relation_count(&self) -> usize {
        self.relations().len()
    }

    fn lookup(&self, text: &str) -> Option<Arc<Pattern>> {
        self.patterns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(text)
            .cloned()
    }

    fn relations(&self) -> MutexGuard<'_, HashMap<(PatternId, PatternId), bool>> {
        self.relations.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn compile(&self, text: &str) -> Result<Pattern> {
        let nfa = parser::parse(text, self.config.recursion_limit)?;
        let dfa = determinize(&nfa, &self.limits)?;
        let id = PatternId::fresh();

        log::debug!(
            "compiled pattern {id} {text:?}: {} NFA states, {} DFA states",
            nfa.len(),
            dfa.len()
        );

        Ok(Pattern::new(id, text.to_owned(), nfa, dfa))
    }
}

impl fmt::Debug for PatternCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternCache")
            .field("config", &self.config)
            .field("patterns", &self.len())
            .field("relations", &self.relation_count())
            .finish()
    }
}
