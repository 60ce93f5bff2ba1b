//! Tests for the vector value type.
//!
//! These tests verify the `Vector` primitive used throughout the pipeline:
//! - Construction from vecs, slices, and iterators
//! - Exact element-wise equality
//! - Euclidean norm and dot product
//! - Dimension-mismatch enforcement
//! - Bracketed textual rendering
//!
//! ## Test Organization
//!
//! 1. **Construction and Access** - Builders, dimension, indexing
//! 2. **Equality** - Exact comparison semantics
//! 3. **Norm** - Values and edge cases
//! 4. **Dot Product** - Values, determinism, error cases
//! 5. **Rendering** - Display format

use approx::assert_relative_eq;

use thetasort::prelude::*;

// ============================================================================
// Construction and Access Tests
// ============================================================================

/// Test construction from the supported source types.
#[test]
fn test_construction_sources() {
    let from_vec = Vector::new(vec![1.0, 2.0, 3.0]);
    let from_slice = Vector::from(&[1.0, 2.0, 3.0][..]);
    let from_iter: Vector<f64> = (1..=3).map(f64::from).collect();

    assert_eq!(from_vec, from_slice);
    assert_eq!(from_vec, from_iter);
    assert_eq!(from_vec.dim(), 3);
    assert!(!from_vec.is_empty());
}

/// Test indexed access and slice view.
#[test]
fn test_element_access() {
    let v = Vector::new(vec![4.0, 5.0, 6.0]);

    assert_eq!(v[0], 4.0);
    assert_eq!(v[2], 6.0);
    assert_eq!(v.as_slice(), &[4.0, 5.0, 6.0]);
    assert_eq!(v.iter().copied().collect::<Vec<f64>>(), vec![4.0, 5.0, 6.0]);
}

/// Test the empty vector's basic properties.
#[test]
fn test_empty_vector() {
    let v: Vector<f64> = Vector::new(vec![]);

    assert_eq!(v.dim(), 0);
    assert!(v.is_empty());
    assert_eq!(v.norm(), 0.0);
}

// ============================================================================
// Equality Tests
// ============================================================================

/// Equality is element-wise and exact, never tolerance-based.
#[test]
fn test_equality_exact() {
    let a = Vector::new(vec![1.0, 2.0, 3.0]);
    let b = Vector::new(vec![1.0, 2.0, 3.0]);
    let c = Vector::new(vec![1.0, 2.0, 3.0 + 1e-12]);

    assert_eq!(a, b);
    assert_ne!(a, c, "Nearly-equal elements must not compare equal");
}

/// Vectors of different dimension are never equal.
#[test]
fn test_equality_dimension() {
    let a = Vector::new(vec![1.0, 2.0]);
    let b = Vector::new(vec![1.0, 2.0, 0.0]);

    assert_ne!(a, b);
}

// ============================================================================
// Norm Tests
// ============================================================================

/// Test norm against known values.
#[test]
fn test_norm_values() {
    let v = Vector::new(vec![3.0, 4.0]);
    assert_relative_eq!(v.norm(), 5.0);

    let unit = Vector::new(vec![1.0, 0.0, 0.0]);
    assert_relative_eq!(unit.norm(), 1.0);

    let negative = Vector::new(vec![-3.0, -4.0]);
    assert_relative_eq!(negative.norm(), 5.0, epsilon = 1e-12);
}

/// Norm equals the square root of the vector's dot product with itself.
#[test]
fn test_norm_matches_self_dot() {
    let v = Vector::new(vec![1.5, -2.0, 0.25]);
    let self_dot: f64 = v.dot(&v).unwrap();

    assert_relative_eq!(v.norm(), self_dot.sqrt());
}

// ============================================================================
// Dot Product Tests
// ============================================================================

/// Test dot product against known values.
#[test]
fn test_dot_values() {
    let a = Vector::new(vec![1.0, 2.0, 3.0]);
    let b = Vector::new(vec![4.0, 5.0, 6.0]);

    assert_relative_eq!(a.dot(&b).unwrap(), 32.0);
    assert_relative_eq!(b.dot(&a).unwrap(), 32.0, epsilon = 1e-12);
}

/// Orthogonal vectors have a zero dot product.
#[test]
fn test_dot_orthogonal() {
    let a = Vector::new(vec![1.0, 0.0]);
    let b = Vector::new(vec![0.0, 1.0]);

    assert_eq!(a.dot(&b).unwrap(), 0.0);
}

/// Summation order is fixed, so repeated evaluation is bit-identical.
#[test]
fn test_dot_deterministic() {
    let a = Vector::new(vec![0.1, 0.2, 0.3, 0.4, 0.5]);
    let b = Vector::new(vec![9.0, -3.0, 7.5, 0.01, 2.0]);

    let first = a.dot(&b).unwrap();
    for _ in 0..10 {
        assert_eq!(a.dot(&b).unwrap(), first);
    }
}

/// Unequal dimensions fail with DimensionMismatch, never truncate.
#[test]
fn test_dot_dimension_mismatch() {
    let a = Vector::new(vec![1.0, 2.0, 3.0]);
    let b = Vector::new(vec![1.0, 2.0]);

    let err = a.dot(&b).unwrap_err();
    assert_eq!(err, ThetaError::DimensionMismatch { expected: 3, got: 2 });

    // Both orientations fail; context fields follow the left operand
    let err = b.dot(&a).unwrap_err();
    assert_eq!(err, ThetaError::DimensionMismatch { expected: 2, got: 3 });
}

// ============================================================================
// Rendering Tests
// ============================================================================

/// Display renders `[e0, e1, ..., en-1]`.
#[test]
fn test_display_format() {
    let v = Vector::new(vec![1.0, 2.0, 3.0]);
    assert_eq!(format!("{v}"), "[1, 2, 3]");

    let single = Vector::new(vec![2.5]);
    assert_eq!(format!("{single}"), "[2.5]");
}

/// The empty vector renders as `[]`.
#[test]
fn test_display_empty() {
    let v: Vector<f64> = Vector::new(vec![]);
    assert_eq!(format!("{v}"), "[]");
}
