//! Tests for the pipeline.
//!
//! These tests verify the eager stage semantics and terminals:
//! - Map/filter running once per element in source order
//! - Immediate sorting of the internal buffer
//! - Typed materialization, including the conversion-failure report
//! - Grouping, last-write-wins projection, and folds
//! - Rendering
//!
//! ## Test Organization
//!
//! 1. **Construction** - sources are copied, never retained
//! 2. **Stages** - map, filter, sort
//! 3. **Materialization** - success, failure, idempotence
//! 4. **Aggregation** - group, flat_map, sum
//! 5. **Rendering** - Display output

use approx::assert_relative_eq;

use anycmp::prelude::*;

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: i64,
    name: &'static str,
}

impl Opaque for User {
    fn view(&self) -> View<'_> {
        View::Identity(self.id)
    }
}

fn users() -> Sequence<User> {
    Sequence::from(vec![
        User { id: 1, name: "a" },
        User { id: 5, name: "b" },
        User { id: 3, name: "b" },
        User { id: 3, name: "x" },
    ])
}

// ============================================================================
// Construction Tests
// ============================================================================

/// Test that sourcing copies elements and leaves the sequence usable.
#[test]
fn test_from_sequence_copies() {
    let source = Sequence::from(vec![1_i64, 2, 3]);
    let pipeline = Pipeline::from_sequence(&source);

    assert_eq!(pipeline.len(), 3);
    assert_eq!(source.values(), &[1, 2, 3], "source untouched");

    let empty = Pipeline::from_values(Vec::<i64>::new());
    assert!(empty.is_empty());
}

// ============================================================================
// Stage Tests
// ============================================================================

/// Test map running eagerly, once per element, in source order.
#[test]
fn test_map_eager_in_source_order() {
    let source = Sequence::from(vec![10_i64, 20, 30]);

    let mut visited = Vec::new();
    let mapped = Pipeline::from_sequence(&source).map(|v| {
        let n = *downcast::<i64>(v).unwrap();
        visited.push(n);
        n + 1
    });

    // The stage already ran: no terminal was needed to trigger it.
    assert_eq!(visited, vec![10, 20, 30]);
    assert_eq!(mapped.materialize::<i64>().unwrap().values(), &[11, 21, 31]);
}

/// Test filter keeping order and staying erased.
#[test]
fn test_filter_keeps_order() {
    let out: Sequence<i64> = Pipeline::from_values(vec![5_i64, 2, 8, 1, 9])
        .filter(|v| downcast::<i64>(v).map_or(false, |n| *n >= 5))
        .materialize()
        .unwrap();

    assert_eq!(out.values(), &[5, 8, 9]);
}

/// Test sorting the buffer immediately, default engine and comparator.
#[test]
fn test_sort_stages() {
    let mut pipeline = Pipeline::from_values(vec![3_i64, 1, 2]);
    pipeline.sort();
    assert_eq!(pipeline.materialize::<i64>().unwrap().values(), &[1, 2, 3]);

    let mut pipeline = Pipeline::from_values(vec![3_i64, 1, 2]);
    pipeline.sort_by(|a, b| greater(a, b));
    assert_eq!(pipeline.materialize::<i64>().unwrap().values(), &[3, 2, 1]);
}

// ============================================================================
// Materialization Tests
// ============================================================================

/// Test a type mismatch surfacing as an error, not a silent drop.
///
/// Verifies the report carries the element position and both type names.
#[test]
fn test_materialize_type_mismatch() {
    let pipeline = Pipeline::from_values(vec![1_i64, 2, 3]);

    let err = pipeline.materialize::<u32>().unwrap_err();
    match err {
        AnyCmpError::TypeMismatch {
            index,
            expected,
            found,
        } => {
            assert_eq!(index, 0);
            assert_eq!(expected, "u32");
            assert_eq!(found, "i64");
        }
    }

    // Mapping changes the element type, and the target must follow.
    let mapped = Pipeline::from_values(vec![1_i64, 2]).map(|v| {
        let n = *downcast::<i64>(v).unwrap();
        n as i32
    });
    assert!(mapped.materialize::<i32>().is_ok());
    assert!(mapped.materialize::<i64>().is_err());
}

/// Test that the error renders with full context.
#[test]
fn test_type_mismatch_display() {
    let err = Pipeline::from_values(vec![7_i64])
        .materialize::<u8>()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Type mismatch at element 0: expected u8, found i64"
    );
}

/// Test materialization idempotence.
///
/// Verifies materializing twice from the same unmodified pipeline yields
/// identical contents and order.
#[test]
fn test_materialize_idempotent() {
    let source = users();
    let pipeline = Pipeline::from_sequence(&source);

    let first: Sequence<User> = pipeline.materialize().unwrap();
    let second: Sequence<User> = pipeline.materialize().unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
}

// ============================================================================
// Aggregation Tests
// ============================================================================

/// Test grouping by key with buckets in encounter order.
#[test]
fn test_group_buckets_in_encounter_order() {
    let pipeline = Pipeline::from_sequence(&users());

    let by_name = pipeline.group(
        |v| downcast::<User>(v).unwrap().name,
        |v| downcast::<User>(v).unwrap().id,
    );

    assert_eq!(by_name.len(), 3);
    assert_eq!(by_name["a"].values(), &[1]);
    assert_eq!(by_name["b"].values(), &[5, 3], "encounter order kept");
    assert_eq!(by_name["x"].values(), &[3]);

    // Key iteration follows first-key-seen order.
    let keys: Vec<_> = by_name.keys().copied().collect();
    assert_eq!(keys, vec!["a", "b", "x"]);
}

/// Test flat_map keeping the last value per colliding key.
#[test]
fn test_flat_map_last_write_wins() {
    let pipeline = Pipeline::from_sequence(&users());

    let by_name = pipeline.flat_map(
        |v| downcast::<User>(v).unwrap().name,
        |v| downcast::<User>(v).unwrap().id,
    );

    assert_eq!(by_name.len(), 3);
    assert_eq!(by_name["a"], 1);
    assert_eq!(by_name["b"], 3, "later collision overwrote id 5");
    assert_eq!(by_name["x"], 3);
}

/// Test the generic fold over integers and floats.
#[test]
fn test_sum_fold() {
    let ints = Pipeline::from_values(vec![1_i64, 2, 3, 4]);
    let total: i64 = ints.sum(|v| *downcast::<i64>(v).unwrap());
    assert_eq!(total, 10);

    let floats = Pipeline::from_values(vec![1.5_f64, 2.25, 3.35]);
    let total: f64 = floats.sum(|v| *downcast::<f64>(v).unwrap());
    assert_relative_eq!(total, 7.1);

    let empty = Pipeline::from_values(Vec::<i64>::new());
    assert_eq!(empty.sum(|_| 1_i64), 0);
}

/// Test for_each visiting in order.
#[test]
fn test_for_each_in_order() {
    let pipeline = Pipeline::from_values(vec![1_i64, 2, 3]);

    let mut seen = Vec::new();
    pipeline.for_each(|v| seen.push(*downcast::<i64>(v).unwrap()));
    assert_eq!(seen, vec![1, 2, 3]);
}

// ============================================================================
// Rendering Tests
// ============================================================================

/// Test Display rendering of the erased buffer.
#[test]
fn test_display_rendering() {
    let pipeline = Pipeline::from_values(vec![1_i64, 2, 3]);
    assert_eq!(pipeline.to_string(), "[1, 2, 3]");
}
