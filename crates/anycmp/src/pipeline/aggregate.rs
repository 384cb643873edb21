//! Grouping and folds over pipeline buffers.
//!
//! ## Purpose
//!
//! This module provides the pipeline terminals that aggregate instead of
//! materializing: keyed grouping, keyed last-write-wins projection, and a
//! generic numeric fold.
//!
//! ## Design notes
//!
//! * **Ordered maps**: grouping returns an `IndexMap`, so key iteration
//!   follows first-key-seen order and bucket contents follow encounter
//!   order. Plain hashing would make group output order nondeterministic
//!   across runs.
//! * **One fold**: `sum` is generic over `num_traits::Zero`, covering the
//!   integer and floating cases with a single entry point. No overflow
//!   checking is performed.

use std::hash::Hash;

use indexmap::IndexMap;
use num_traits::Zero;

use crate::pipeline::stages::Pipeline;
use crate::probe::view::Opaque;
use crate::sequence::core::Sequence;

// ============================================================================
// Grouping
// ============================================================================

impl Pipeline {
    /// Group elements by computed key, appending `value(element)` into
    /// each bucket in encounter order.
    pub fn group<K, V, KF, VF>(&self, mut key: KF, mut value: VF) -> IndexMap<K, Sequence<V>>
    where
        K: Hash + Eq,
        KF: FnMut(&dyn Opaque) -> K,
        VF: FnMut(&dyn Opaque) -> V,
    {
        let mut buckets: IndexMap<K, Sequence<V>> = IndexMap::new();
        for item in &self.items {
            buckets
                .entry(key(item.as_ref()))
                .or_default()
                .push(value(item.as_ref()));
        }
        buckets
    }

    /// Project elements to a keyed map where later elements with a
    /// colliding key overwrite earlier ones.
    pub fn flat_map<K, V, KF, VF>(&self, mut key: KF, mut value: VF) -> IndexMap<K, V>
    where
        K: Hash + Eq,
        KF: FnMut(&dyn Opaque) -> K,
        VF: FnMut(&dyn Opaque) -> V,
    {
        let mut out: IndexMap<K, V> = IndexMap::new();
        for item in &self.items {
            out.insert(key(item.as_ref()), value(item.as_ref()));
        }
        out
    }

    /// Fold `value(element)` over the buffer. Unchecked arithmetic.
    pub fn sum<N, F>(&self, mut value: F) -> N
    where
        N: Zero,
        F: FnMut(&dyn Opaque) -> N,
    {
        self.items
            .iter()
            .fold(N::zero(), |acc, item| acc + value(item.as_ref()))
    }
}
