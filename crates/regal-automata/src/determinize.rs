//! Subset construction: NFA → DFA.
//!
//! 1. The epsilon closure of the NFA start becomes the DFA start.
//! 2. For each discovered subset and each byte class, step on the class
//!    representative and close over epsilon edges again.
//! 3. Every distinct sorted subset becomes one DFA state; the empty subset is
//!    the dead state.
//!
//! Subsets are memoized in insertion order and expanded breadth-first, so
//! state numbering is deterministic. No minimization is performed.

use std::collections::VecDeque;

use indexmap::IndexMap;

use crate::dfa::{DEAD, Dfa};
use crate::invariants::ensure_registered;
use crate::nfa::Nfa;
use crate::{Error, Limits, Result, StateId};

/// Determinize `nfa`, failing once the DFA would exceed `limits.max_states`.
pub fn determinize(nfa: &Nfa, limits: &Limits) -> Result<Dfa> {
    let classes = nfa.byte_classes();
    let mut dfa = Dfa::new(classes.clone());

    let mut subsets: IndexMap<Vec<StateId>, StateId> = IndexMap::new();
    subsets.insert(Vec::new(), DEAD);

    let start_set = nfa.epsilon_closure(&[nfa.start()]);
    let start = register(&mut dfa, &mut subsets, nfa, start_set.clone(), limits)?;
    dfa.set_start(start);

    let mut worklist = VecDeque::from([start_set]);

    while let Some(current) = worklist.pop_front() {
        let from = ensure_registered(subsets.get(&current).copied(), "subset");

        for (class, byte) in classes.representatives() {
            let moved = nfa.step(&current, byte);
            if moved.is_empty() {
                continue;
            }

            let next = nfa.epsilon_closure(&moved);
            let to = match subsets.get(&next) {
                Some(&existing) => existing,
                None => {
                    let id = register(&mut dfa, &mut subsets, nfa, next.clone(), limits)?;
                    worklist.push_back(next);
                    id
                }
            };
            dfa.set_transition(from, class, to);
        }
    }

    log::trace!(
        "determinized {} NFA states into {} DFA states over {} byte classes",
        nfa.len(),
        dfa.len(),
        classes.len()
    );

    Ok(dfa)
}

fn register(
    dfa: &mut Dfa,
    subsets: &mut IndexMap<Vec<StateId>, StateId>,
    nfa: &Nfa,
    set: Vec<StateId>,
    limits: &Limits,
) -> Result<StateId> {
    if dfa.len() >= limits.max_states {
        log::debug!(
            "subset construction stopped at {} states (limit {})",
            dfa.len(),
            limits.max_states
        );
        return Err(Error::StateLimitExceeded {
            limit: limits.max_states,
        });
    }

    let id = dfa.add_state(nfa.any_accept(&set));
    subsets.insert(set, id);
    Ok(id)
}
