//! Layer 2: Probe
//!
//! # Purpose
//!
//! This layer classifies opaque values. A value participates in comparison
//! by exposing a single capability view (an identity fingerprint, a
//! canonical display string, or a primitive numeric representation) and
//! the pair prober turns two such values into one resolved comparison
//! strategy, or reports the pair incomparable.
//!
//! Classification happens in exactly one place. The engine above branches
//! on the prober's result; no operator re-inspects types on its own.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Pipeline
//!   ↓
//! Layer 4: Sequence
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Probe ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// The `Opaque` trait and capability views.
pub mod view;

/// Built-in `Opaque` implementations for primitives and boxes.
pub mod builtin;

/// Pairwise capability resolution.
pub mod pair;
