//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;

impl Parser<'_, '_> {
    #[inline]
    pub(super) fn ensure_not_eof(&self) {
        assert!(
            !self.eof(),
            "broken parser invariant: token consumed past end of input (upstream caller's responsibility)"
        );
    }
}
