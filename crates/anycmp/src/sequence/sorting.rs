//! Sorting and reversal for sequences.
//!
//! ## Purpose
//!
//! This module provides comparator-driven and engine-default sorting for
//! [`Sequence`], plus in-place reversal.
//!
//! ## Design notes
//!
//! * **Unstable**: sorting uses `sort_unstable_by`. The contract never
//!   promises stability, so none is claimed or tested here.
//! * **Less-predicate comparators**: callers supply `less(a, b) -> bool`,
//!   the crate-wide comparator shape; it is bridged to an `Ordering` by
//!   asking both directions. Incomparable pairs answer `false` both ways
//!   and therefore tie.
//! * **Reversal is not a sort**: `reverse` inverts the *current* order in
//!   place. It never re-sorts first.

use std::cmp::Ordering;

use crate::engine::ordering::Engine;
use crate::probe::view::Opaque;
use crate::sequence::core::Sequence;

// ============================================================================
// Sorting
// ============================================================================

impl<T> Sequence<T> {
    /// Sort in place with a caller-supplied less-predicate. Unstable.
    pub fn sort_by(&mut self, mut less: impl FnMut(&T, &T) -> bool) {
        self.items.sort_unstable_by(|a, b| {
            if less(a, b) {
                Ordering::Less
            } else if less(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
    }

    /// Reverse the current order in place. Never re-sorts.
    pub fn reverse(&mut self) {
        self.items.reverse();
    }
}

impl<T: Opaque> Sequence<T> {
    /// Sort ascending by the default engine's ordering. Unstable;
    /// incomparable pairs tie and keep an arbitrary relative order.
    pub fn sort(&mut self) {
        self.sort_with(&Engine::new());
    }

    /// Sort ascending by `engine`'s ordering, honoring its policies.
    pub fn sort_with(&mut self, engine: &Engine) {
        self.items.sort_unstable_by(|a, b| {
            if engine.less(a, b) {
                Ordering::Less
            } else if engine.less(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
    }
}
