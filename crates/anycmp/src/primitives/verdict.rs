//! The five ordering/equality queries.
//!
//! ## Purpose
//!
//! This module defines [`Verdict`], the enumeration of the five boolean
//! queries the comparison engine can be asked, and the single evaluator
//! that applies a verdict to an ordered pair.
//!
//! ## Design notes
//!
//! * **Requested, not stored**: a verdict names the question being asked;
//!   nothing in this crate persists one.
//! * **Partial by construction**: evaluation goes through `PartialOrd`, so
//!   values without an order (NaN against anything, for instance) fail
//!   every verdict including equality.
//!
//! ## Non-goals
//!
//! * This module does not decide *which* representations of two opaque
//!   values get compared; that is the probe layer's job.

// ============================================================================
// Verdict
// ============================================================================

/// One of the five ordering/equality queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The two values are equal.
    Equal,

    /// The left value orders strictly before the right.
    Less,

    /// The left value orders before the right or equals it.
    LessOrEqual,

    /// The left value orders strictly after the right.
    Greater,

    /// The left value orders after the right or equals it.
    GreaterOrEqual,
}

impl Verdict {
    /// Apply this verdict to an ordered pair.
    ///
    /// Uses `PartialOrd`, so a pair with no defined order fails every
    /// verdict.
    #[inline]
    pub fn holds<T: PartialOrd>(self, a: &T, b: &T) -> bool {
        match self {
            Verdict::Equal => a == b,
            Verdict::Less => a < b,
            Verdict::LessOrEqual => a <= b,
            Verdict::Greater => a > b,
            Verdict::GreaterOrEqual => a >= b,
        }
    }
}
