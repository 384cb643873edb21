//! # anycmp: capability-probed comparison for type-erased values
//!
//! `anycmp` decides equality and ordering between values whose concrete
//! types are unknown at the comparison site, without asking the caller for
//! a comparator. Values advertise a single *capability* (an identity
//! fingerprint, a canonical display string, or a primitive numeric
//! representation) and the engine probes both sides, picks the shared
//! strategy, and answers one of five ordering queries. Pairs with no shared
//! strategy are *incomparable*: every query, including equality, is `false`.
//!
//! On top of the engine sit two collection abstractions:
//!
//! * [`Sequence<T>`](prelude::Sequence): an ordered container with
//!   engine-backed membership, set algebra (union / intersection /
//!   symmetric difference), and sorting.
//! * [`Pipeline`](prelude::Pipeline): a chain of eager map / filter /
//!   sort / group stages over type-erased elements, materializing back
//!   into a typed `Sequence`.
//!
//! ## Quick Start
//!
//! ```rust
//! use anycmp::prelude::*;
//!
//! let a = Sequence::from(vec![1_i64, 2, 3]);
//! let b = Sequence::from(vec![2_i64, 3, 4]);
//!
//! // Set algebra never mutates its inputs.
//! assert_eq!(a.union_all(&b).values(), &[1, 2, 3, 4]);
//! assert_eq!(a.retain_all(&b).values(), &[2, 3]);
//! assert_eq!(a.remove_all(&b).values(), &[1, 4]);
//! ```
//!
//! ## Participating with a capability
//!
//! A type joins the comparison universe by implementing [`Opaque`] with a
//! one-line [`View`](prelude::View):
//!
//! ```rust
//! use anycmp::prelude::*;
//!
//! #[derive(Debug, Clone)]
//! struct User {
//!     id: i64,
//!     name: String,
//! }
//!
//! impl Opaque for User {
//!     fn view(&self) -> View<'_> {
//!         View::Identity(self.id)
//!     }
//! }
//!
//! let a = User { id: 7, name: "ada".into() };
//! let b = User { id: 7, name: "alan".into() };
//!
//! // Identity capability: fingerprints decide, field contents do not.
//! assert!(equal(&a, &b));
//! assert!(!less(&a, &b));
//! ```
//!
//! Values with no capability and no shared primitive representation are
//! incomparable, never an error:
//!
//! ```rust
//! use anycmp::prelude::*;
//!
//! assert!(!equal(&3_i32, &3_i64)); // distinct runtime types
//! assert!(!less(&3_i32, &3_i64));
//! ```
//!
//! ## Pipelines and error handling
//!
//! Pipeline stages are eager; the one fallible step is materializing back
//! into a typed sequence, which reports the first element that cannot be
//! downcast:
//!
//! ```rust
//! use anycmp::prelude::*;
//!
//! let source = Sequence::from(vec![1_i64, 2, 3, 4]);
//!
//! let doubled: Sequence<i64> = Pipeline::from_sequence(&source)
//!     .map(|v| downcast::<i64>(v).copied().unwrap_or(0) * 2)
//!     .filter(|v| downcast::<i64>(v).map_or(false, |n| *n > 2))
//!     .materialize()?;
//!
//! assert_eq!(doubled.values(), &[4, 6, 8]);
//! # Result::<(), AnyCmpError>::Ok(())
//! ```
//!
//! A mismatched target type is the `Err` case, not a silent drop:
//!
//! ```rust
//! use anycmp::prelude::*;
//!
//! let pipeline = Pipeline::from_values(vec![1_i64, 2, 3]);
//! let result = pipeline.materialize::<u32>();
//! assert!(matches!(result, Err(AnyCmpError::TypeMismatch { index: 0, .. })));
//! ```
//!
//! ## Ordering contract
//!
//! The engine is deliberately weaker than `Ord`. Within one capability kind
//! the usual guarantees hold (`equal` is symmetric, `less`/`greater` are
//! anti-symmetric), but across kinds there is no transitivity, and the
//! default complex-number rule applies each query to the real and imaginary
//! parts *conjunctively*, which is not a total order. That rule lives
//! behind the named [`ComplexRule`](prelude::ComplexRule) policy so callers
//! can opt into lexicographic ordering instead.

// Layer 1: Primitives - verdicts and error types.
mod primitives;

// Layer 2: Probe - capability classification of opaque values.
mod probe;

// Layer 3: Engine - verdict resolution over probed pairs.
mod engine;

// Layer 4: Sequence - the ordered container and its set algebra.
mod sequence;

// Layer 5: Pipeline - eager transformation stages over erased elements.
mod pipeline;

// Public surface re-exports.
mod api;

pub use api::Opaque;

// Standard anycmp prelude.
pub mod prelude {
    pub use crate::api::{
        downcast, equal, greater, greater_equal, less, less_equal, probe_pair, AnyCmpError,
        AsAny, Capability,
        ComplexRule::{self, Conjunctive, Lexicographic},
        Engine, Opaque, Pipeline, ResolvedPair, Sequence, Verdict, View,
    };
}
