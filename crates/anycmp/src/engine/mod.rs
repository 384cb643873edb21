//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer answers the five ordering/equality queries over pairs of
//! opaque values. It consumes the probe layer's pair resolution and applies
//! the requested verdict; it is the only place a verdict meets data.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: Pipeline
//!   ↓
//! Layer 4: Sequence
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Probe
//!   ↓
//! Layer 1: Primitives
//! ```

/// Verdict application and the complex-number policy.
pub mod ordering;
