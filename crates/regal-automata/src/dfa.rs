//! Deterministic automata: dense transition tables over byte classes.
//!
//! State 0 is always the dead state. It never accepts and every transition
//! out of it loops back, so the transition function is total: a byte with no
//! explicit transition simply leads to [`DEAD`].

use std::collections::VecDeque;
use std::fmt::Write;

use indexmap::IndexMap;

use crate::StateId;
use crate::alphabet::{ByteClasses, ByteSet};

/// The absorbing, non-accepting sink present in every DFA.
pub const DEAD: StateId = StateId::from_raw(0);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dfa {
    classes: ByteClasses,
    /// Row-major `state × class` table.
    transitions: Vec<StateId>,
    accept: Vec<bool>,
    start: StateId,
}

impl Dfa {
    /// A DFA holding only the dead state, which is also the start.
    pub(crate) fn new(classes: ByteClasses) -> Self {
        let stride = classes.len();
        Self {
            classes,
            transitions: vec![DEAD; stride],
            accept: vec![false],
            start: DEAD,
        }
    }

    /// Append a state whose transitions all lead to the dead state.
    pub(crate) fn add_state(&mut self, accept: bool) -> StateId {
        let id = StateId::from_index(self.accept.len());
        self.accept.push(accept);
        self.transitions
            .extend(std::iter::repeat_n(DEAD, self.classes.len()));
        id
    }

    pub(crate) fn set_transition(&mut self, from: StateId, class: usize, to: StateId) {
        let stride = self.stride();
        self.transitions[from.as_usize() * stride + class] = to;
    }

    pub(crate) fn set_start(&mut self, start: StateId) {
        self.start = start;
    }

    #[inline]
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Number of states, dead state included.
    #[inline]
    pub fn len(&self) -> usize {
        self.accept.len()
    }

    /// Never true: the dead state always exists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.accept.is_empty()
    }

    #[inline]
    pub fn classes(&self) -> &ByteClasses {
        &self.classes
    }

    #[inline]
    fn stride(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn is_accept(&self, id: StateId) -> bool {
        self.accept[id.as_usize()]
    }

    #[inline]
    pub fn next_state(&self, id: StateId, byte: u8) -> StateId {
        self.next_state_by_class(id, self.classes.get(byte))
    }

    #[inline]
    pub fn next_state_by_class(&self, id: StateId, class: usize) -> StateId {
        self.transitions[id.as_usize() * self.stride() + class]
    }

    pub fn cursor(&self) -> Cursor<'_> {
        Cursor {
            dfa: self,
            state: self.start,
        }
    }

    /// Whether the whole of `input` is in the language.
    pub fn matches(&self, input: impl AsRef<[u8]>) -> bool {
        let mut cursor = self.cursor();
        for &byte in input.as_ref() {
            cursor.step(byte);
            if cursor.is_dead() {
                return false;
            }
        }
        cursor.is_accept()
    }

    /// Whether the language is empty: no accepting state is reachable.
    pub fn is_empty_language(&self) -> bool {
        let mut seen = vec![false; self.len()];
        let mut queue = VecDeque::from([self.start]);
        seen[self.start.as_usize()] = true;

        while let Some(id) = queue.pop_front() {
            if self.is_accept(id) {
                return false;
            }
            for class in 0..self.stride() {
                let next = self.next_state_by_class(id, class);
                if !seen[next.as_usize()] {
                    seen[next.as_usize()] = true;
                    queue.push_back(next);
                }
            }
        }

        true
    }

    /// Shortest accepted string, or `None` for the empty language.
    ///
    /// Ties between strings of equal length go to the one that is smallest
    /// when each byte is replaced by its class representative.
    pub fn shortest_member(&self) -> Option<Vec<u8>> {
        let mut parent: Vec<Option<(StateId, u8)>> = vec![None; self.len()];
        let mut seen = vec![false; self.len()];
        let mut queue = VecDeque::from([self.start]);
        seen[self.start.as_usize()] = true;

        while let Some(id) = queue.pop_front() {
            if self.is_accept(id) {
                let mut out = Vec::new();
                let mut current = id;
                while let Some((prev, byte)) = parent[current.as_usize()] {
                    out.push(byte);
                    current = prev;
                }
                out.reverse();
                return Some(out);
            }
            for (class, byte) in self.classes.representatives() {
                let next = self.next_state_by_class(id, class);
                if !seen[next.as_usize()] {
                    seen[next.as_usize()] = true;
                    parent[next.as_usize()] = Some((id, byte));
                    queue.push_back(next);
                }
            }
        }

        None
    }

    /// The complement over all byte strings: accept flags flipped.
    ///
    /// The dead state becomes accepting, so state 0 no longer is a sink in the
    /// result's sense; the table stays total.
    pub fn complement(&self) -> Dfa {
        Dfa {
            classes: self.classes.clone(),
            transitions: self.transitions.clone(),
            accept: self.accept.iter().map(|a| !a).collect(),
            start: self.start,
        }
    }

    /// Human-readable dump of the transition table.
    ///
    /// One line per state, `*` marking accepting states. Transitions to the
    /// dead state are omitted and bytes leading to the same target are merged.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        writeln!(out, "start: {}", self.start).expect("String write never fails");

        for index in 0..self.len() {
            let id = StateId::from_index(index);
            let marker = if self.is_accept(id) { "*" } else { "" };
            if id == DEAD && !self.is_accept(id) {
                writeln!(out, "{id}: dead").expect("String write never fails");
                continue;
            }

            let mut targets: IndexMap<StateId, ByteSet> = IndexMap::new();
            for class in 0..self.stride() {
                let next = self.next_state_by_class(id, class);
                if next == DEAD && id != DEAD {
                    continue;
                }
                let members = self.classes.members(class);
                let entry = targets.entry(next).or_default();
                *entry = entry.union(members);
            }

            let edges: Vec<String> = targets
                .iter()
                .map(|(target, set)| format!("{set:?} -> {target}"))
                .collect();
            if edges.is_empty() {
                writeln!(out, "{id}{marker}:").expect("String write never fails");
            } else {
                writeln!(out, "{id}{marker}: {}", edges.join(", "))
                    .expect("String write never fails");
            }
        }

        out
    }
}

/// Left-to-right simulation state over a [`Dfa`].
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    dfa: &'a Dfa,
    state: StateId,
}

impl Cursor<'_> {
    /// Return to the start state.
    pub fn restart(&mut self) {
        self.state = self.dfa.start;
    }

    /// Consume one byte.
    #[inline]
    pub fn step(&mut self, byte: u8) {
        self.state = self.dfa.next_state(self.state, byte);
    }

    #[inline]
    pub fn state(&self) -> StateId {
        self.state
    }

    /// Whether the input consumed so far is accepted.
    #[inline]
    pub fn is_accept(&self) -> bool {
        self.dfa.is_accept(self.state)
    }

    /// Whether no continuation can be accepted any more.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.state == DEAD && !self.dfa.is_accept(DEAD)
    }
}
