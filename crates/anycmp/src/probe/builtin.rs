//! Built-in `Opaque` implementations.
//!
//! ## Purpose
//!
//! This module wires the primitive numeric types, the complex types, a few
//! deliberately inert types, and the two box forms into the capability
//! system, so plain data participates without adapter code.
//!
//! ## Design notes
//!
//! * **Numeric widening only**: a primitive's view widens its value to the
//!   shared carrier; the pair prober's type-equality gate is what keeps
//!   distinct widths incomparable.
//! * **Inert on purpose**: `bool`, `char`, strings, and `()` classify as
//!   `Inert`. The upstream behavior this crate preserves treats them as
//!   incomparable data, and silently granting strings a display capability
//!   would change the answer of every string comparison.
//! * **One unwrap level**: box impls report their contents via `inner`;
//!   nested boxes are not chased.

use num_complex::{Complex, Complex64};

use crate::probe::view::{Opaque, View};

// ============================================================================
// Numeric Primitives
// ============================================================================

macro_rules! impl_opaque_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Opaque for $ty {
                #[inline]
                fn view(&self) -> View<'_> {
                    View::Int(*self as i128)
                }
            }
        )*
    };
}

macro_rules! impl_opaque_uint {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Opaque for $ty {
                #[inline]
                fn view(&self) -> View<'_> {
                    View::Uint(*self as u128)
                }
            }
        )*
    };
}

macro_rules! impl_opaque_inert {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Opaque for $ty {
                #[inline]
                fn view(&self) -> View<'_> {
                    View::Inert
                }
            }
        )*
    };
}

impl_opaque_int!(i8, i16, i32, i64, i128, isize);
impl_opaque_uint!(u8, u16, u32, u64, u128, usize);

impl Opaque for f32 {
    #[inline]
    fn view(&self) -> View<'_> {
        View::Float(f64::from(*self))
    }
}

impl Opaque for f64 {
    #[inline]
    fn view(&self) -> View<'_> {
        View::Float(*self)
    }
}

impl Opaque for Complex<f32> {
    #[inline]
    fn view(&self) -> View<'_> {
        View::Complex(Complex64::new(f64::from(self.re), f64::from(self.im)))
    }
}

impl Opaque for Complex64 {
    #[inline]
    fn view(&self) -> View<'_> {
        View::Complex(*self)
    }
}

// ============================================================================
// Inert Types
// ============================================================================

// No numeric representation: the structural path only understands numeric
// representations, so these never compare equal, even to themselves.
impl_opaque_inert!(bool, char, String, &'static str, ());

// ============================================================================
// Boxes
// ============================================================================

impl<T: Opaque> Opaque for Box<T> {
    fn view(&self) -> View<'_> {
        (**self).view()
    }

    fn inner(&self) -> Option<&dyn Opaque> {
        Some(&**self)
    }

    fn type_label(&self) -> &'static str {
        (**self).type_label()
    }
}

impl Opaque for Box<dyn Opaque> {
    fn view(&self) -> View<'_> {
        (**self).view()
    }

    fn inner(&self) -> Option<&dyn Opaque> {
        Some(&**self)
    }

    fn type_label(&self) -> &'static str {
        (**self).type_label()
    }
}
