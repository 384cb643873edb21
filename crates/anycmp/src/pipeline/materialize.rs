//! Typed materialization of pipeline buffers.
//!
//! ## Purpose
//!
//! This module ends a pipeline by converting its erased buffer back into a
//! typed [`Sequence`]. This is the crate's one fallible operation: every
//! element must downcast to the requested target type, and the first that
//! does not is reported with its position and both type names.
//!
//! ## Design notes
//!
//! * **Non-consuming**: materialization borrows the buffer and clones the
//!   downcast elements, so materializing twice from an unmodified pipeline
//!   yields identical sequences.
//! * **Fail loudly**: a mismatched element is an `Err`, never a silent
//!   skip or truncation.

use std::any::type_name;

use crate::pipeline::stages::Pipeline;
use crate::primitives::errors::AnyCmpError;
use crate::probe::view::Opaque;
use crate::sequence::core::Sequence;

// ============================================================================
// Materialization
// ============================================================================

impl Pipeline {
    /// Copy the buffered elements into a new typed sequence.
    ///
    /// # Errors
    ///
    /// [`AnyCmpError::TypeMismatch`] for the first element that is not a
    /// `T`.
    pub fn materialize<T: Opaque + Clone>(&self) -> Result<Sequence<T>, AnyCmpError> {
        let mut out = Sequence::with_capacity(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            match item.as_ref().as_any().downcast_ref::<T>() {
                Some(value) => out.push(value.clone()),
                None => {
                    return Err(AnyCmpError::TypeMismatch {
                        index,
                        expected: type_name::<T>(),
                        found: item.as_ref().type_label(),
                    })
                }
            }
        }
        Ok(out)
    }
}
