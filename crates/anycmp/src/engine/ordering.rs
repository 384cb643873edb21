//! Verdict application over probed pairs.
//!
//! ## Purpose
//!
//! This module implements the comparison engine: five entry points, one per
//! [`Verdict`], each a pure boolean predicate over two opaque values. The
//! pair is resolved once by the probe layer; this module only applies the
//! requested verdict to the resolved data.
//!
//! ## Design notes
//!
//! * **False absorbs failure**: an incomparable pair answers `false` to all
//!   five queries, equality included. Nothing here returns an error or
//!   panics.
//! * **Named complex policy**: the default complex-number rule applies
//!   the verdict to the real and imaginary components independently and
//!   requires *both* to hold. That conjunctive rule is not a total order
//!   (`equal`, `less`, and `greater` can all be `false` for the same pair),
//!   so it lives behind [`ComplexRule`], with a lexicographic opt-out.
//!
//! ## Invariants
//!
//! * `equal(a, b) == equal(b, a)` whenever the pair resolves.
//! * `less(a, b)` implies `!less(b, a)` within one resolved strategy.
//! * No transitivity guarantee across capability kinds.

use crate::primitives::verdict::Verdict;
use crate::probe::pair::{probe_pair, ResolvedPair};
use crate::probe::view::Opaque;

// ============================================================================
// Complex Policy
// ============================================================================

/// Policy for ordering complex (pair-of-reals) values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComplexRule {
    /// Apply the verdict to the real and imaginary parts independently and
    /// require both to hold. The default; not a total order.
    #[default]
    Conjunctive,

    /// Compare `(re, im)` pairs lexicographically. Restores a total order
    /// on complex values (NaN aside) for callers that want one.
    Lexicographic,
}

// ============================================================================
// Engine
// ============================================================================

/// The comparison engine.
///
/// A stateless value; construction is free. The only knob is the
/// complex-number policy:
///
/// ```rust
/// use anycmp::prelude::*;
/// use num_complex::Complex64;
///
/// let engine = Engine::new().complex_rule(Lexicographic);
/// assert!(engine.less(&Complex64::new(1.0, 9.0), &Complex64::new(2.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Engine {
    complex: ComplexRule,
}

impl Engine {
    /// Engine with the default (conjunctive) complex rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the complex-number ordering policy.
    pub fn complex_rule(mut self, rule: ComplexRule) -> Self {
        self.complex = rule;
        self
    }

    /// Apply `verdict` to the pair. Incomparable pairs answer `false`.
    pub fn compare(&self, a: &dyn Opaque, b: &dyn Opaque, verdict: Verdict) -> bool {
        match probe_pair(a, b) {
            None => false,
            Some(ResolvedPair::Identity(x, y)) => verdict.holds(&x, &y),
            Some(ResolvedPair::Display(x, y)) => verdict.holds(&x, &y),
            Some(ResolvedPair::Int(x, y)) => verdict.holds(&x, &y),
            Some(ResolvedPair::Uint(x, y)) => verdict.holds(&x, &y),
            Some(ResolvedPair::Float(x, y)) => verdict.holds(&x, &y),
            Some(ResolvedPair::Complex(x, y)) => match self.complex {
                ComplexRule::Conjunctive => {
                    verdict.holds(&x.re, &y.re) && verdict.holds(&x.im, &y.im)
                }
                ComplexRule::Lexicographic => verdict.holds(&(x.re, x.im), &(y.re, y.im)),
            },
        }
    }

    /// `a == b` under the resolved strategy.
    pub fn equal(&self, a: &dyn Opaque, b: &dyn Opaque) -> bool {
        self.compare(a, b, Verdict::Equal)
    }

    /// `a < b` under the resolved strategy.
    pub fn less(&self, a: &dyn Opaque, b: &dyn Opaque) -> bool {
        self.compare(a, b, Verdict::Less)
    }

    /// `a <= b` under the resolved strategy.
    pub fn less_equal(&self, a: &dyn Opaque, b: &dyn Opaque) -> bool {
        self.compare(a, b, Verdict::LessOrEqual)
    }

    /// `a > b` under the resolved strategy.
    pub fn greater(&self, a: &dyn Opaque, b: &dyn Opaque) -> bool {
        self.compare(a, b, Verdict::Greater)
    }

    /// `a >= b` under the resolved strategy.
    pub fn greater_equal(&self, a: &dyn Opaque, b: &dyn Opaque) -> bool {
        self.compare(a, b, Verdict::GreaterOrEqual)
    }
}

// ============================================================================
// Free Operators
// ============================================================================

/// `a == b` under the default engine.
pub fn equal(a: &dyn Opaque, b: &dyn Opaque) -> bool {
    Engine::new().equal(a, b)
}

/// `a < b` under the default engine.
pub fn less(a: &dyn Opaque, b: &dyn Opaque) -> bool {
    Engine::new().less(a, b)
}

/// `a <= b` under the default engine.
pub fn less_equal(a: &dyn Opaque, b: &dyn Opaque) -> bool {
    Engine::new().less_equal(a, b)
}

/// `a > b` under the default engine.
pub fn greater(a: &dyn Opaque, b: &dyn Opaque) -> bool {
    Engine::new().greater(a, b)
}

/// `a >= b` under the default engine.
pub fn greater_equal(a: &dyn Opaque, b: &dyn Opaque) -> bool {
    Engine::new().greater_equal(a, b)
}
