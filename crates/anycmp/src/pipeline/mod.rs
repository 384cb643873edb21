//! Layer 5: Pipeline
//!
//! # Purpose
//!
//! This layer provides [`Pipeline`], a chain of transformation stages over
//! type-erased elements. Despite the lazy-sounding domain vocabulary,
//! every stage runs eagerly and buffers its output; the pipeline ends by
//! materializing into a typed [`Sequence`], iterating, aggregating, or
//! rendering.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Pipeline ← You are here
//!   ↓
//! Layer 4: Sequence
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Probe
//!   ↓
//! Layer 1: Primitives
//! ```
//!
//! [`Pipeline`]: stages::Pipeline
//! [`Sequence`]: crate::sequence::core::Sequence

/// Construction, map/filter/sort stages, and rendering.
pub mod stages;

/// Grouping and folds.
pub mod aggregate;

/// Typed materialization back into a sequence.
pub mod materialize;
