//! The ordered container and its membership operations.
//!
//! ## Purpose
//!
//! This module defines [`Sequence`] and everything that does not allocate a
//! second container: plumbing (push, prepend, clear, iteration) and the
//! engine-backed membership family (`contains`, `contains_all`, `index_of`,
//! `remove`).
//!
//! ## Design notes
//!
//! * **Bounds per method**: the struct itself is a plain `Vec` newtype;
//!   only comparison-backed operations require `T: Opaque`.
//! * **Linear membership**: `contains` is an O(n) scan with engine
//!   equality. There is no hashing; equality here is capability equality,
//!   not `Eq`.
//! * **Empty-operand policy**: `contains_all` requires both sides
//!   non-empty and answers `false` otherwise. An empty operand carries no
//!   meaningful intersection signal; this is a documented policy, not an
//!   error.

use crate::engine::ordering::equal;
use crate::probe::view::Opaque;

// ============================================================================
// Sequence
// ============================================================================

/// An owned, resizable sequence with engine-backed membership and set
/// algebra. Insertion order is preserved unless explicitly sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

// ============================================================================
// Plumbing
// ============================================================================

impl<T> Sequence<T> {
    /// Empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty sequence with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The stored elements, in order.
    pub fn values(&self) -> &[T] {
        &self.items
    }

    /// Element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Consume the sequence, yielding its backing vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Append one element at the back.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Insert elements at the front, keeping their given order.
    pub fn prepend(&mut self, values: Vec<T>) {
        self.items.splice(0..0, values);
    }

    /// Iterate the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// New sequence holding the elements that satisfy `pred`, in order.
    pub fn filter(&self, mut pred: impl FnMut(&T) -> bool) -> Sequence<T>
    where
        T: Clone,
    {
        Sequence {
            items: self.items.iter().filter(|v| pred(v)).cloned().collect(),
        }
    }
}

// ============================================================================
// Membership
// ============================================================================

impl<T: Opaque> Sequence<T> {
    /// Whether some stored element is engine-equal to `value`. O(n).
    pub fn contains(&self, value: &T) -> bool {
        self.items.iter().any(|stored| equal(stored, value))
    }

    /// Whether every element of `other` is contained here.
    ///
    /// Requires both sequences non-empty; an empty operand answers `false`
    /// by policy.
    pub fn contains_all(&self, other: &Sequence<T>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        other.items.iter().all(|v| self.contains(v))
    }

    /// Position of the first element engine-equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|stored| equal(stored, value))
    }

    /// Remove at most one occurrence per given value, preserving the
    /// relative order of survivors. Returns the number removed.
    pub fn remove(&mut self, values: &[T]) -> usize {
        let mut removed = 0;
        for value in values {
            if let Some(index) = self.index_of(value) {
                self.items.remove(index);
                removed += 1;
            }
        }
        removed
    }
}

// ============================================================================
// Conversions and Iteration
// ============================================================================

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
