//! Pipeline construction and transformation stages.
//!
//! ## Purpose
//!
//! This module defines [`Pipeline`] and its stages: typed construction
//! from a sequence or iterator, eager map and filter over erased elements,
//! immediate in-place sorting, iteration, and `Display` rendering.
//!
//! ## Design notes
//!
//! * **Eager throughout**: each stage runs immediately and buffers its
//!   output. Callbacks run exactly once per element, in source order, so
//!   side-effect timing is observable and stable.
//! * **Erased on purpose**: elements live as `Box<dyn Opaque>` between
//!   stages. Keeping the erasure is what makes materialization a real,
//!   reportable conversion step instead of a silent cast.
//! * **Shallow sourcing**: construction clones elements out of the source;
//!   the source container is never mutated or retained.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::engine::ordering::Engine;
use crate::probe::view::Opaque;
use crate::sequence::core::Sequence;

// ============================================================================
// Pipeline
// ============================================================================

/// An owned chain of eager transformation stages over type-erased
/// elements.
#[derive(Debug, Default)]
pub struct Pipeline {
    pub(crate) items: Vec<Box<dyn Opaque>>,
}

// ============================================================================
// Construction
// ============================================================================

impl Pipeline {
    /// Empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline over a shallow copy of `source`'s elements, in order.
    pub fn from_sequence<T: Opaque + Clone>(source: &Sequence<T>) -> Self {
        Self {
            items: source
                .values()
                .iter()
                .map(|v| Box::new(v.clone()) as Box<dyn Opaque>)
                .collect(),
        }
    }

    /// Pipeline over owned values, in iteration order.
    pub fn from_values<T, I>(values: I) -> Self
    where
        T: Opaque,
        I: IntoIterator<Item = T>,
    {
        Self {
            items: values
                .into_iter()
                .map(|v| Box::new(v) as Box<dyn Opaque>)
                .collect(),
        }
    }

    /// Number of buffered elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the pipeline buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// Stages
// ============================================================================

impl Pipeline {
    /// Apply `f` to every element, eagerly, in source order. The results
    /// form the new buffer.
    pub fn map<U, F>(self, mut f: F) -> Pipeline
    where
        U: Opaque,
        F: FnMut(&dyn Opaque) -> U,
    {
        Pipeline {
            items: self
                .items
                .iter()
                .map(|item| Box::new(f(item.as_ref())) as Box<dyn Opaque>)
                .collect(),
        }
    }

    /// Keep the elements satisfying `pred`, in order. Eager.
    pub fn filter<F>(self, mut pred: F) -> Pipeline
    where
        F: FnMut(&dyn Opaque) -> bool,
    {
        Pipeline {
            items: self
                .items
                .into_iter()
                .filter(|item| pred(item.as_ref()))
                .collect(),
        }
    }

    /// Sort the buffer immediately with a less-predicate. Unstable.
    pub fn sort_by<F>(&mut self, mut less: F)
    where
        F: FnMut(&dyn Opaque, &dyn Opaque) -> bool,
    {
        self.items.sort_unstable_by(|a, b| {
            if less(a.as_ref(), b.as_ref()) {
                std::cmp::Ordering::Less
            } else if less(b.as_ref(), a.as_ref()) {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        });
    }

    /// Sort the buffer by the default engine's ordering. Incomparable
    /// pairs tie.
    pub fn sort(&mut self) {
        self.sort_with(&Engine::new());
    }

    /// Sort the buffer by `engine`'s ordering, honoring its policies.
    pub fn sort_with(&mut self, engine: &Engine) {
        self.sort_by(|a, b| engine.less(a, b));
    }

    /// Visit every buffered element in order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&dyn Opaque),
    {
        for item in &self.items {
            f(item.as_ref());
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl Display for Pipeline {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:?}", self.items)
    }
}
