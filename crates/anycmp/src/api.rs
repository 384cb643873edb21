//! Public surface for anycmp.
//!
//! ## Purpose
//!
//! This module is the re-export hub: every type and function a caller is
//! meant to touch is reachable from here (and, for the common subset, from
//! [`crate::prelude`]). Internal layers stay private; the layered module
//! tree is an implementation detail.

// Layer 1: verdicts and errors.
pub use crate::primitives::errors::AnyCmpError;
pub use crate::primitives::verdict::Verdict;

// Layer 2: participation trait, views, and the pair prober.
pub use crate::probe::pair::{probe_pair, ResolvedPair};
pub use crate::probe::view::{downcast, AsAny, Capability, Opaque, View};

// Layer 3: the engine and the free operators.
pub use crate::engine::ordering::{
    equal, greater, greater_equal, less, less_equal, ComplexRule, Engine,
};

// Layer 4: the ordered container.
pub use crate::sequence::core::Sequence;

// Layer 5: the pipeline.
pub use crate::pipeline::stages::Pipeline;

// The complex carrier type, re-exported so implementors of numeric views
// need no direct num-complex dependency.
pub use num_complex::Complex64;
