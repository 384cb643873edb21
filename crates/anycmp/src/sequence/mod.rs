//! Layer 4: Sequence
//!
//! # Purpose
//!
//! This layer provides [`Sequence`], the ordered deduplicating container:
//! a resizable, insertion-ordered sequence whose membership tests, set
//! algebra, and default ordering all go through the comparison engine.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Pipeline
//!   ↓
//! Layer 4: Sequence ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Probe
//!   ↓
//! Layer 1: Primitives
//! ```
//!
//! [`Sequence`]: self::core::Sequence

/// The container, its plumbing, and engine-backed membership.
pub mod core;

/// Pure set algebra: intersection, symmetric difference, union.
pub mod algebra;

/// Sorting and reversal.
pub mod sorting;
