//! Tests for the capability prober.
//!
//! These tests verify value classification and pairwise resolution:
//! - Built-in views for primitives, complex numbers, and inert types
//! - Capability tags derived from views
//! - Pair resolution through the direct and structural paths
//! - Box delegation and the one-level unwrap rule
//!
//! ## Test Organization
//!
//! 1. **Views and Capabilities** - what each built-in classifies as
//! 2. **Pair Resolution** - resolved strategies and incomparable pairs
//! 3. **Boxing** - view delegation and unwrap behavior
//! 4. **Downcasting** - the closure-side escape hatch

use std::borrow::Cow;

use anycmp::prelude::*;
use num_complex::Complex64;

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Label(String);

impl Opaque for Label {
    fn view(&self) -> View<'_> {
        View::Display(Cow::Borrowed(&self.0))
    }
}

// ============================================================================
// View and Capability Tests
// ============================================================================

/// Test the built-in numeric views widen into the shared carriers.
#[test]
fn test_builtin_numeric_views() {
    assert_eq!(3_i8.view(), View::Int(3));
    assert_eq!((-3_i64).view(), View::Int(-3));
    assert_eq!(3_u16.view(), View::Uint(3));
    assert_eq!(usize::MAX.view(), View::Uint(usize::MAX as u128));
    assert_eq!(1.5_f32.view(), View::Float(1.5));
    assert_eq!(
        Complex64::new(1.0, 2.0).view(),
        View::Complex(Complex64::new(1.0, 2.0))
    );
}

/// Test capability tags for every view variant.
#[test]
fn test_view_capability_tags() {
    assert_eq!(View::Identity(1).capability(), Capability::Identity);
    assert_eq!(
        View::Display(Cow::Borrowed("x")).capability(),
        Capability::Display
    );
    assert_eq!(View::Int(1).capability(), Capability::Int);
    assert_eq!(View::Uint(1).capability(), Capability::Uint);
    assert_eq!(View::Float(1.0).capability(), Capability::Float);
    assert_eq!(
        View::Complex(Complex64::new(0.0, 0.0)).capability(),
        Capability::Complex
    );
    assert_eq!(View::Inert.capability(), Capability::Inert);
}

/// Test the deliberately inert built-ins.
#[test]
fn test_inert_builtins() {
    assert_eq!(true.view(), View::Inert);
    assert_eq!('x'.view(), View::Inert);
    assert_eq!("x".to_string().view(), View::Inert);
    assert_eq!("x".view(), View::Inert);
    assert_eq!(().view(), View::Inert);
}

// ============================================================================
// Pair Resolution Tests
// ============================================================================

/// Test structural resolution of same-type numeric pairs.
#[test]
fn test_probe_pair_structural() {
    assert_eq!(probe_pair(&1_i64, &2_i64), Some(ResolvedPair::Int(1, 2)));
    assert_eq!(probe_pair(&1_u8, &2_u8), Some(ResolvedPair::Uint(1, 2)));
    assert_eq!(
        probe_pair(&1.0_f64, &2.0_f64),
        Some(ResolvedPair::Float(1.0, 2.0))
    );
}

/// Test direct-path resolution of display participants.
#[test]
fn test_probe_pair_direct_display() {
    let a = Label("a".into());
    let b = Label("b".into());

    assert_eq!(
        probe_pair(&a, &b),
        Some(ResolvedPair::Display(
            Cow::Borrowed("a"),
            Cow::Borrowed("b")
        ))
    );
}

/// Test incomparable pairs resolving to None.
///
/// Verifies the type-equality gate and the no-further-fallback rule.
#[test]
fn test_probe_pair_incomparable() {
    // Distinct numeric widths.
    assert_eq!(probe_pair(&1_i32, &1_i64), None);
    // Signedness mismatch.
    assert_eq!(probe_pair(&1_i64, &1_u64), None);
    // Capability against numeric.
    assert_eq!(probe_pair(&Label("1".into()), &1_i64), None);
    // Inert against itself.
    assert_eq!(probe_pair(&true, &true), None);
}

// ============================================================================
// Boxing Tests
// ============================================================================

/// Test that boxes delegate views and expose their contents.
#[test]
fn test_box_delegates_view() {
    let boxed: Box<i64> = Box::new(4);
    assert_eq!(boxed.view(), View::Int(4));

    let erased: Box<dyn Opaque> = Box::new(Label("x".into()));
    assert_eq!(erased.view(), View::Display(Cow::Borrowed("x")));
}

/// Test the one-level unwrap rule in pair resolution.
#[test]
fn test_box_unwraps_one_level_only() {
    let one: Box<i64> = Box::new(4);
    assert_eq!(probe_pair(&one, &4_i64), Some(ResolvedPair::Int(4, 4)));

    // Box-to-box also resolves: both sides unwrap once.
    let other: Box<i64> = Box::new(5);
    assert_eq!(probe_pair(&one, &other), Some(ResolvedPair::Int(4, 5)));

    // A double box stays one level too deep.
    let nested: Box<Box<i64>> = Box::new(Box::new(4));
    assert_eq!(probe_pair(&nested, &4_i64), None);
}

/// Test that type labels survive box delegation.
#[test]
fn test_type_label_through_box() {
    let erased: Box<dyn Opaque> = Box::new(7_i64);
    assert_eq!(erased.type_label(), "i64");
    assert_eq!(7_i64.type_label(), "i64");
}

// ============================================================================
// Downcast Tests
// ============================================================================

/// Test the downcast helper recovering concrete references.
#[test]
fn test_downcast_helper() {
    let erased: Box<dyn Opaque> = Box::new(42_i64);
    let value: &dyn Opaque = erased.as_ref();

    assert_eq!(downcast::<i64>(value), Some(&42));
    assert_eq!(downcast::<u64>(value), None);

    let label = Label("x".into());
    let as_opaque: &dyn Opaque = &label;
    assert_eq!(downcast::<Label>(as_opaque), Some(&label));
}
