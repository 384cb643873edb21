//! Pairwise capability resolution.
//!
//! ## Purpose
//!
//! This module is the prober proper: given two opaque values, decide which
//! comparison strategy applies to the pair, carrying the already-extracted
//! data for the engine to judge. A pair with no shared strategy resolves
//! to `None`, meaning incomparable, and the engine turns that into `false` for
//! every verdict.
//!
//! ## Key concepts
//!
//! ### Dual-path resolution
//!
//! 1. **Direct path**: if both sides expose the identity-hash capability,
//!    or both expose the display capability, the pair resolves from the
//!    views as given. Boxes delegate their view, so a boxed value's
//!    capability counts here.
//! 2. **Structural path**: otherwise, unwrap one level of boxing per side,
//!    require the unwrapped runtime types to match exactly, and classify
//!    by numeric representation. Anything non-numeric is incomparable.
//!
//! A capability present on only one side never falls back further: the
//! direct path needs both, and the structural type gate rejects distinct
//! types before any numeric match is attempted.
//!
//! ## Invariants
//!
//! * Resolution is deterministic and side-effect free.
//! * `probe_pair(a, b)` and `probe_pair(b, a)` resolve to the same strategy
//!   (with operands swapped) whenever either resolves at all.

use std::borrow::Cow;

use num_complex::Complex64;

use crate::probe::view::{Opaque, View};

// ============================================================================
// Resolved Pairs
// ============================================================================

/// Two opaque values resolved to one comparison strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedPair<'a> {
    /// Both sides expose identity fingerprints.
    Identity(i64, i64),
    /// Both sides expose canonical display strings.
    Display(Cow<'a, str>, Cow<'a, str>),
    /// Same runtime type, signed integer representation.
    Int(i128, i128),
    /// Same runtime type, unsigned integer representation.
    Uint(u128, u128),
    /// Same runtime type, floating-point representation.
    Float(f64, f64),
    /// Same runtime type, complex representation.
    Complex(Complex64, Complex64),
}

// ============================================================================
// Pair Prober
// ============================================================================

/// Resolve two opaque values to a comparison strategy, or `None` if the
/// pair is incomparable.
pub fn probe_pair<'a>(a: &'a dyn Opaque, b: &'a dyn Opaque) -> Option<ResolvedPair<'a>> {
    // Direct path: caller-defined capabilities, boxing intact.
    match (a.view(), b.view()) {
        (View::Identity(x), View::Identity(y)) => return Some(ResolvedPair::Identity(x, y)),
        (View::Display(x), View::Display(y)) => return Some(ResolvedPair::Display(x, y)),
        _ => {}
    }

    // Structural path: unwrap one level of indirection, then gate on exact
    // runtime type equality before classifying.
    let a = a.inner().unwrap_or(a);
    let b = b.inner().unwrap_or(b);
    if a.as_any().type_id() != b.as_any().type_id() {
        return None;
    }

    match (a.view(), b.view()) {
        (View::Int(x), View::Int(y)) => Some(ResolvedPair::Int(x, y)),
        (View::Uint(x), View::Uint(y)) => Some(ResolvedPair::Uint(x, y)),
        (View::Float(x), View::Float(y)) => Some(ResolvedPair::Float(x, y)),
        (View::Complex(x), View::Complex(y)) => Some(ResolvedPair::Complex(x, y)),
        _ => None,
    }
}
