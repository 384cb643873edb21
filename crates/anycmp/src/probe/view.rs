//! The `Opaque` participation trait and capability views.
//!
//! ## Purpose
//!
//! This module defines how a value of statically unknown type joins the
//! comparison universe: it implements [`Opaque`] and answers [`view`] with
//! a value-carrying classification of itself. The classification is
//! computed fresh on every call, so comparison stays a pure predicate over
//! the two values as they are right now.
//!
//! ## Design notes
//!
//! * **One capability per type**: a type answers with exactly one `View`
//!   variant. Identity-hash and display capabilities cannot both be
//!   claimed, which removes the need for a priority rule between them.
//! * **Widened carriers**: integer views widen to `i128`/`u128` so every
//!   native width shares a carrier, but the runtime *type* equality gate in
//!   the pair prober still keeps `i32` and `i64` apart.
//! * **Boxes delegate**: `Box<T>` and `Box<dyn Opaque>` answer with their
//!   contents' view and expose the contents through [`Opaque::inner`], so
//!   one level of indirection is transparent to the direct path and
//!   unwrappable on the structural path.
//!
//! ## Invariants
//!
//! * `view` is deterministic and side-effect free for a given value.
//! * `inner` unwraps at most one level; it never chases chains.
//!
//! [`view`]: Opaque::view

use std::any::{type_name, Any};
use std::borrow::Cow;
use std::fmt::Debug;

use num_complex::Complex64;

// ============================================================================
// Any Access
// ============================================================================

/// Uniform access to `dyn Any` for every `'static` type.
///
/// Blanket-implemented so `Opaque` implementors only ever write `view`.
pub trait AsAny: Any {
    /// Borrow the value as `dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Convert a boxed value into `Box<dyn Any>` for by-value downcasting.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

// ============================================================================
// Capability Views
// ============================================================================

/// The capability kinds a value can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Caller-defined integer fingerprint.
    Identity,
    /// Caller-defined canonical string rendering.
    Display,
    /// Signed integer representation.
    Int,
    /// Unsigned integer representation.
    Uint,
    /// Floating-point representation.
    Float,
    /// Complex (pair-of-reals) representation.
    Complex,
    /// No capability; the value never compares to anything.
    Inert,
}

/// A value-carrying capability classification of one opaque value.
///
/// `Display` borrows from the value when the rendering already exists as a
/// field, and owns it when it has to be computed.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    /// Identity-hash capability with the value's fingerprint.
    Identity(i64),
    /// Display capability with the value's canonical rendering.
    Display(Cow<'a, str>),
    /// Signed integer, widened.
    Int(i128),
    /// Unsigned integer, widened.
    Uint(u128),
    /// Floating point, widened.
    Float(f64),
    /// Complex pair of reals.
    Complex(Complex64),
    /// No capability.
    Inert,
}

impl View<'_> {
    /// The capability kind this view carries.
    pub fn capability(&self) -> Capability {
        match self {
            View::Identity(_) => Capability::Identity,
            View::Display(_) => Capability::Display,
            View::Int(_) => Capability::Int,
            View::Uint(_) => Capability::Uint,
            View::Float(_) => Capability::Float,
            View::Complex(_) => Capability::Complex,
            View::Inert => Capability::Inert,
        }
    }
}

// ============================================================================
// Opaque Trait
// ============================================================================

/// A value that can be handled without full static type knowledge at the
/// comparison boundary.
///
/// Implementors answer [`view`](Opaque::view) with their capability; the
/// other methods have working defaults. `Debug` is required so erased
/// pipeline buffers stay renderable.
pub trait Opaque: AsAny + Debug {
    /// Classify this value, carrying the data the engine compares.
    fn view(&self) -> View<'_>;

    /// Unwrap one level of indirection, if this value is a box around
    /// another opaque value.
    fn inner(&self) -> Option<&dyn Opaque> {
        None
    }

    /// Human-readable type name, used in conversion-failure reports.
    fn type_label(&self) -> &'static str {
        type_name::<Self>()
    }
}

/// Borrow the concrete value back out of an opaque reference.
///
/// Convenience for pipeline closures, which receive `&dyn Opaque`.
pub fn downcast<T: Opaque>(value: &dyn Opaque) -> Option<&T> {
    value.as_any().downcast_ref::<T>()
}
