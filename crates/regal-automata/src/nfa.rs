//! Thompson-style NFA construction.
//!
//! Fragments are built inside an [`NfaBuilder`] arena and wired together with
//! epsilon transitions. Combinators consume their operand fragments, so a
//! fragment's states are owned by exactly one enclosing expression; use
//! [`NfaBuilder::copy`] when the same sub-automaton is needed twice.
//!
//! Cycles created by closure are plain index relationships inside the arena.

use crate::StateId;
use crate::alphabet::{ByteClassBuilder, ByteClasses, ByteSet};

/// What a transition consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    /// Consumes nothing.
    Epsilon,
    /// Consumes exactly this byte.
    Byte(u8),
    /// Consumes any byte of the set (complement already applied for negated classes).
    Set(ByteSet),
}

impl Label {
    #[inline]
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Label::Epsilon)
    }

    /// Whether this label consumes `byte`. Epsilon consumes nothing.
    #[inline]
    pub fn accepts(&self, byte: u8) -> bool {
        match self {
            Label::Epsilon => false,
            Label::Byte(b) => *b == byte,
            Label::Set(set) => set.contains(byte),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub label: Label,
    pub target: StateId,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    pub accept: bool,
    pub transitions: Vec<Transition>,
}

/// A partially built automaton: one entry state and the states it accepts in.
///
/// Accept states are tracked on the fragment rather than on the states, so a
/// fragment stays open for further combination. [`NfaBuilder::finish`] seals it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub start: StateId,
    pub accepts: Vec<StateId>,
}

/// Arena in which fragments are built and combined.
#[derive(Debug, Default)]
pub struct NfaBuilder {
    states: Vec<State>,
}

impl NfaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of states allocated so far, including unreachable ones.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    fn add_state(&mut self) -> StateId {
        let id = StateId::from_index(self.states.len());
        self.states.push(State::default());
        id
    }

    fn add_transition(&mut self, from: StateId, label: Label, target: StateId) {
        self.states[from.as_usize()]
            .transitions
            .push(Transition { label, target });
    }

    fn add_epsilon(&mut self, from: StateId, target: StateId) {
        self.add_transition(from, Label::Epsilon, target);
    }

    fn labeled(&mut self, label: Label) -> Fragment {
        let start = self.add_state();
        let accept = self.add_state();
        self.add_transition(start, label, accept);
        Fragment {
            start,
            accepts: vec![accept],
        }
    }

    /// Matches exactly `byte`.
    pub fn symbol(&mut self, byte: u8) -> Fragment {
        self.labeled(Label::Byte(byte))
    }

    /// Matches one byte of `set`, or one byte outside it when `negated`.
    pub fn class(&mut self, set: ByteSet, negated: bool) -> Fragment {
        let set = if negated { set.complement() } else { set };
        self.labeled(Label::Set(set))
    }

    /// Matches any single byte.
    pub fn any(&mut self) -> Fragment {
        self.labeled(Label::Set(ByteSet::full()))
    }

    /// Matches only the empty string.
    pub fn empty(&mut self) -> Fragment {
        let start = self.add_state();
        Fragment {
            start,
            accepts: vec![start],
        }
    }

    /// `AB`: every accept of `a` flows into the start of `b`.
    pub fn concat(&mut self, a: Fragment, b: Fragment) -> Fragment {
        for &accept in &a.accepts {
            self.add_epsilon(accept, b.start);
        }
        Fragment {
            start: a.start,
            accepts: b.accepts,
        }
    }

    /// `A|B`: a fresh start branches into both operands.
    pub fn union(&mut self, a: Fragment, b: Fragment) -> Fragment {
        let start = self.add_state();
        self.add_epsilon(start, a.start);
        self.add_epsilon(start, b.start);
        let mut accepts = a.accepts;
        accepts.extend(b.accepts);
        Fragment { start, accepts }
    }

    /// `A*`: an accepting loop entry in front of `a`, with every accept of
    /// `a` looping back to it.
    ///
    /// The entry is a fresh state: `a.start` may already have incoming edges
    /// (e.g. `(x*y)*`), and marking it accepting would accept proper prefixes.
    pub fn closure(&mut self, a: Fragment) -> Fragment {
        let entry = self.add_state();
        self.add_epsilon(entry, a.start);
        for &accept in &a.accepts {
            self.add_epsilon(accept, entry);
        }
        let mut accepts = vec![entry];
        accepts.extend(a.accepts);
        Fragment {
            start: entry,
            accepts,
        }
    }

    /// `A?`: an accepting entry that may skip `a` entirely.
    pub fn optional(&mut self, a: Fragment) -> Fragment {
        let entry = self.add_state();
        self.add_epsilon(entry, a.start);
        let mut accepts = vec![entry];
        accepts.extend(a.accepts);
        Fragment {
            start: entry,
            accepts,
        }
    }

    /// `A+`: every accept of `a` loops back to its start.
    ///
    /// No state is added, so stacked `+` keeps the builder linear in the
    /// pattern. Splitting an accepting path at the back edges yields runs
    /// from `a.start` to an accept of `a`, each a member of `A`.
    pub fn one_or_more(&mut self, a: Fragment) -> Fragment {
        for &accept in &a.accepts {
            self.add_epsilon(accept, a.start);
        }
        a
    }

    /// Duplicate every state reachable from `fragment.start`.
    pub fn copy(&mut self, fragment: &Fragment) -> Fragment {
        let reachable = reachable_from(&self.states, fragment.start);
        let mut remap = vec![None; self.states.len()];
        for &old in &reachable {
            remap[old.as_usize()] = Some(self.add_state());
        }

        for &old in &reachable {
            let new = self.remapped(&remap, old);
            let transitions: Vec<Transition> = self.states[old.as_usize()]
                .transitions
                .iter()
                .map(|t| Transition {
                    label: t.label,
                    target: self.remapped(&remap, t.target),
                })
                .collect();
            let accept = self.states[old.as_usize()].accept;
            let state = &mut self.states[new.as_usize()];
            state.accept = accept;
            state.transitions = transitions;
        }

        Fragment {
            start: self.remapped(&remap, fragment.start),
            accepts: fragment
                .accepts
                .iter()
                .map(|&accept| self.remapped(&remap, accept))
                .collect(),
        }
    }

    fn remapped(&self, remap: &[Option<StateId>], old: StateId) -> StateId {
        remap[old.as_usize()].unwrap_or_else(|| self.unmapped_state(old))
    }

    /// Seal `fragment` into an [`Nfa`].
    ///
    /// Only states reachable from the fragment's start are kept; they are
    /// renumbered in discovery order, so the start becomes state 0.
    pub fn finish(self, fragment: Fragment) -> Nfa {
        let reachable = reachable_from(&self.states, fragment.start);
        let mut remap = vec![None; self.states.len()];
        for (new, &old) in reachable.iter().enumerate() {
            remap[old.as_usize()] = Some(StateId::from_index(new));
        }

        let mut states: Vec<State> = reachable
            .iter()
            .map(|&old| {
                let state = &self.states[old.as_usize()];
                State {
                    accept: state.accept,
                    transitions: state
                        .transitions
                        .iter()
                        .map(|t| Transition {
                            label: t.label,
                            target: self.remapped(&remap, t.target),
                        })
                        .collect(),
                }
            })
            .collect();

        for &accept in &fragment.accepts {
            states[self.remapped(&remap, accept).as_usize()].accept = true;
        }

        Nfa {
            states,
            start: StateId::from_index(0),
        }
    }
}

/// States reachable from `start` over any transition, in DFS discovery order.
fn reachable_from(states: &[State], start: StateId) -> Vec<StateId> {
    let mut seen = vec![false; states.len()];
    let mut order = Vec::new();
    let mut stack = vec![start];
    seen[start.as_usize()] = true;

    while let Some(id) = stack.pop() {
        order.push(id);
        for t in states[id.as_usize()].transitions.iter().rev() {
            if !seen[t.target.as_usize()] {
                seen[t.target.as_usize()] = true;
                stack.push(t.target);
            }
        }
    }

    order
}

/// A sealed nondeterministic automaton.
///
/// Every state is reachable from `start`, which is always state 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nfa {
    states: Vec<State>,
    start: StateId,
}

impl Nfa {
    #[inline]
    pub fn start(&self) -> StateId {
        self.start
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Never true: a sealed NFA has at least its start state.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[inline]
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.as_usize()]
    }

    #[inline]
    pub fn is_accept(&self, id: StateId) -> bool {
        self.states[id.as_usize()].accept
    }

    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (StateId::from_index(i), s))
    }

    /// Epsilon closure of `seeds`, sorted and deduplicated.
    ///
    /// Closure loops introduce epsilon cycles; the visited set makes the walk
    /// terminate regardless.
    pub fn epsilon_closure(&self, seeds: &[StateId]) -> Vec<StateId> {
        let mut seen = vec![false; self.states.len()];
        let mut closure = Vec::new();
        let mut stack: Vec<StateId> = Vec::with_capacity(seeds.len());

        for &seed in seeds {
            if !seen[seed.as_usize()] {
                seen[seed.as_usize()] = true;
                stack.push(seed);
            }
        }

        while let Some(id) = stack.pop() {
            closure.push(id);
            for t in &self.states[id.as_usize()].transitions {
                if t.label.is_epsilon() && !seen[t.target.as_usize()] {
                    seen[t.target.as_usize()] = true;
                    stack.push(t.target);
                }
            }
        }

        closure.sort_unstable();
        closure
    }

    /// States reached from `set` by consuming `byte`, before epsilon closure.
    pub fn step(&self, set: &[StateId], byte: u8) -> Vec<StateId> {
        let mut next = Vec::new();
        for &id in set {
            for t in &self.states[id.as_usize()].transitions {
                if t.label.accepts(byte) {
                    next.push(t.target);
                }
            }
        }
        next.sort_unstable();
        next.dedup();
        next
    }

    /// Whether any state of `set` accepts.
    pub fn any_accept(&self, set: &[StateId]) -> bool {
        set.iter().any(|&id| self.is_accept(id))
    }

    /// The effective alphabet: byte classes induced by all labels.
    pub fn byte_classes(&self) -> ByteClasses {
        let mut builder = ByteClassBuilder::new();
        for state in &self.states {
            for t in &state.transitions {
                match &t.label {
                    Label::Epsilon => {}
                    Label::Byte(b) => builder.add_byte(*b),
                    Label::Set(set) => builder.add_set(set),
                }
            }
        }
        builder.build()
    }

    /// Direct set simulation, without building a DFA.
    pub fn matches(&self, input: impl AsRef<[u8]>) -> bool {
        let mut current = self.epsilon_closure(&[self.start]);
        for &byte in input.as_ref() {
            if current.is_empty() {
                return false;
            }
            current = self.epsilon_closure(&self.step(&current, byte));
        }
        self.any_accept(&current)
    }
}
