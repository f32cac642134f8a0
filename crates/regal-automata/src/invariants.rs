//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::StateId;
use crate::nfa::NfaBuilder;

impl NfaBuilder {
    pub(crate) fn unmapped_state(&self, id: StateId) -> ! {
        panic!(
            "NfaBuilder: state {id} is not reachable from the fragment being copied \
             (fragments must only reference their own states)"
        )
    }
}

pub(crate) fn ensure_registered<T: Copy>(id: Option<T>, what: &str) -> T {
    id.unwrap_or_else(|| panic!("{what} must be registered before it is expanded"))
}
