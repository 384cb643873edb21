//! Error types for anycmp operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions this crate can report to a
//! caller. The comparison engine itself never fails: incomparable pairs
//! resolve to `false` for every verdict and empty set-algebra operands
//! resolve per documented policy. The one genuinely reportable failure is
//! a pipeline materialization that cannot downcast an element to the
//! requested target type.
//!
//! ## Design notes
//!
//! * **Contextual**: errors carry the failing element's index and both
//!   type names, so the mismatch can be diagnosed without re-running.
//! * **Surfaced, never swallowed**: a materialization mismatch is returned
//!   to the caller rather than dropping the element.
//!
//! ## Non-goals
//!
//! * This module does not model incomparability or empty operands as
//!   errors; those are ordinary `false`/policy outcomes by design.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for anycmp operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyCmpError {
    /// A pipeline element could not be converted to the materialization
    /// target type.
    TypeMismatch {
        /// Zero-based position of the offending element in the pipeline.
        index: usize,
        /// Type name the caller asked to materialize into.
        expected: &'static str,
        /// Type name of the element actually found at `index`.
        found: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for AnyCmpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::TypeMismatch {
                index,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Type mismatch at element {index}: expected {expected}, found {found}"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for AnyCmpError {}
