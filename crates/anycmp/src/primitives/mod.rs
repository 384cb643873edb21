//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive vocabulary shared by every other
//! layer: the five comparison verdicts and the crate error type. It has
//! zero internal dependencies within the crate.
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
//! Layer 2: Probe
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// The five ordering/equality queries.
pub mod verdict;
