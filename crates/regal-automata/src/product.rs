//! Product construction over two DFAs.
//!
//! Both operands are total over bytes, so stepping them in lockstep on the
//! refined byte classes of the pair is enough to decide any boolean
//! combination of their languages. Only reachable pairs are built; the
//! visited-pair map guarantees termination even when both operands are
//! cyclic.

use std::collections::VecDeque;

use indexmap::IndexMap;

use crate::dfa::{DEAD, Dfa};
use crate::invariants::ensure_registered;
use crate::{Error, Limits, Result, StateId};

/// Boolean combination computed by [`product`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetOp {
    /// In both languages.
    Intersection,
    /// In the left language but not in the right one.
    Difference,
    /// In either language.
    Union,
    /// In exactly one of the languages.
    SymmetricDifference,
}

impl SetOp {
    /// Acceptance of a product state from the acceptance of its components.
    pub fn accepts(self, left: bool, right: bool) -> bool {
        match self {
            SetOp::Intersection => left && right,
            SetOp::Difference => left && !right,
            SetOp::Union => left || right,
            SetOp::SymmetricDifference => left != right,
        }
    }

    /// Whether a pair can never reach acceptance, given which components are
    /// stuck in their dead state.
    fn collapses(self, left_dead: bool, right_dead: bool) -> bool {
        match self {
            SetOp::Intersection => left_dead || right_dead,
            SetOp::Difference => left_dead,
            SetOp::Union | SetOp::SymmetricDifference => left_dead && right_dead,
        }
    }
}

/// Build the product automaton of `left` and `right` under `op`.
pub fn product(left: &Dfa, right: &Dfa, op: SetOp, limits: &Limits) -> Result<Dfa> {
    let classes = left.classes().refine(right.classes());
    let mut dfa = Dfa::new(classes.clone());
    let mut pairs: IndexMap<(StateId, StateId), StateId> = IndexMap::new();
    let mut worklist = VecDeque::new();

    let start = (left.start(), right.start());
    let start_id = visit(&mut dfa, &mut pairs, &mut worklist, left, right, op, start, limits)?;
    dfa.set_start(start_id);

    while let Some(pair) = worklist.pop_front() {
        let from = ensure_registered(pairs.get(&pair).copied(), "state pair");
        for (class, byte) in classes.representatives() {
            let next = (
                left.next_state(pair.0, byte),
                right.next_state(pair.1, byte),
            );
            let to = visit(&mut dfa, &mut pairs, &mut worklist, left, right, op, next, limits)?;
            dfa.set_transition(from, class, to);
        }
    }

    log::trace!(
        "{op:?} product of {} x {} states has {} states",
        left.len(),
        right.len(),
        dfa.len()
    );

    Ok(dfa)
}

/// Map a pair to its product state, allocating and queueing it on first sight.
#[allow(clippy::too_many_arguments)]
fn visit(
    dfa: &mut Dfa,
    pairs: &mut IndexMap<(StateId, StateId), StateId>,
    worklist: &mut VecDeque<(StateId, StateId)>,
    left: &Dfa,
    right: &Dfa,
    op: SetOp,
    pair: (StateId, StateId),
    limits: &Limits,
) -> Result<StateId> {
    let left_dead = pair.0 == DEAD && !left.is_accept(DEAD);
    let right_dead = pair.1 == DEAD && !right.is_accept(DEAD);
    if op.collapses(left_dead, right_dead) {
        return Ok(DEAD);
    }

    if let Some(&id) = pairs.get(&pair) {
        return Ok(id);
    }

    if dfa.len() >= limits.max_states {
        log::debug!(
            "{op:?} product stopped at {} states (limit {})",
            dfa.len(),
            limits.max_states
        );
        return Err(Error::StateLimitExceeded {
            limit: limits.max_states,
        });
    }

    let accept = op.accepts(left.is_accept(pair.0), right.is_accept(pair.1));
    let id = dfa.add_state(accept);
    pairs.insert(pair, id);
    worklist.push_back(pair);
    Ok(id)
}

impl Dfa {
    /// Strings accepted by `self` but not by `other`.
    pub fn difference(&self, other: &Dfa, limits: &Limits) -> Result<Dfa> {
        product(self, other, SetOp::Difference, limits)
    }

    /// Strings accepted by both automata.
    pub fn intersection(&self, other: &Dfa, limits: &Limits) -> Result<Dfa> {
        product(self, other, SetOp::Intersection, limits)
    }

    /// Strings accepted by either automaton.
    pub fn union(&self, other: &Dfa, limits: &Limits) -> Result<Dfa> {
        product(self, other, SetOp::Union, limits)
    }

    /// Whether every string accepted by `self` is accepted by `other`.
    pub fn is_subset_of(&self, other: &Dfa, limits: &Limits) -> Result<bool> {
        Ok(self.difference(other, limits)?.is_empty_language())
    }

    /// Whether both automata accept the same language.
    pub fn is_equivalent_to(&self, other: &Dfa, limits: &Limits) -> Result<bool> {
        Ok(self.is_subset_of(other, limits)? && other.is_subset_of(self, limits)?)
    }
}
