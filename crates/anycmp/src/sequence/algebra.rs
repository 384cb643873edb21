//! Pure set algebra over sequences.
//!
//! ## Purpose
//!
//! This module implements the three set operations: intersection
//! (`retain_all`), symmetric difference (`remove_all`), and union
//! (`union_all`). Membership goes through engine equality, so the algebra
//! works for any capability kind.
//!
//! ## Design notes
//!
//! * **Pure**: every operation allocates and returns a fresh sequence;
//!   neither input is mutated, and the result never aliases an input's
//!   backing storage. The empty-operand shortcuts return *clones*, not the
//!   inputs themselves.
//! * **`retain_all` ordering is deliberate**: the two-pass shape orders
//!   the intersection by the *argument's* element order, deduplicated.
//!   That asymmetry is part of the contract; both
//!   argument orders are accepted and give mirrored results.
//! * **Edge policies**: an empty argument to `retain_all` or
//!   `remove_all` yields a clone of `self`; an empty `self` yields empty.
//!   One-side-empty `union_all` clones the other side without a dedup
//!   pass, as does `remove_all`.

use crate::probe::view::Opaque;
use crate::sequence::core::Sequence;

// ============================================================================
// Set Algebra
// ============================================================================

impl<T: Opaque + Clone> Sequence<T> {
    /// Element-wise intersection with `other`.
    ///
    /// Result order follows `other` among values common to both sides,
    /// deduplicated.
    pub fn retain_all(&self, other: &Sequence<T>) -> Sequence<T> {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return Sequence::new();
        }

        // First pass: self's elements present in other, in self's order.
        let mut kept = Sequence::new();
        for value in &self.items {
            if other.contains(value) {
                kept.push(value.clone());
            }
        }
        if kept.is_empty() {
            return kept;
        }

        // Second pass: re-filter against other's order, deduplicating.
        let mut result = Sequence::new();
        for value in &other.items {
            if kept.contains(value) && !result.contains(value) {
                result.push(value.clone());
            }
        }
        result
    }

    /// Symmetric difference: elements of `self` not in `other`, then
    /// elements of `other` not in `self`.
    pub fn remove_all(&self, other: &Sequence<T>) -> Sequence<T> {
        if self.is_empty() {
            return Sequence::new();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut result = Sequence::new();
        for value in &self.items {
            if !other.contains(value) {
                result.push(value.clone());
            }
        }
        for value in &other.items {
            if !self.contains(value) {
                result.push(value.clone());
            }
        }
        result
    }

    /// Union: both inputs concatenated, deduplicated in first-seen order
    /// (`self` first, then `other`).
    pub fn union_all(&self, other: &Sequence<T>) -> Sequence<T> {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }

        let mut result = Sequence::new();
        for value in self.items.iter().chain(other.items.iter()) {
            if !result.contains(value) {
                result.push(value.clone());
            }
        }
        result
    }
}
