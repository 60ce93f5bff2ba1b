//! Angle between two vectors.
//!
//! ## Purpose
//!
//! This module computes the angle theta between two vectors as the arccosine
//! of their normalized dot product.
//!
//! ## Design notes
//!
//! * **Pure**: A single deterministic function of its two operands.
//! * **No stabilization**: The standard `acos` is invoked directly on
//!   `dot / (norm · norm)`; no clamping or rescaling is applied.
//!
//! ## Key concepts
//!
//! * **Range**: For well-conditioned inputs the result lies in [0, π] radians.
//! * **Degenerate inputs**: If either operand has zero norm, the division
//!   produces the platform NaN and `acos` propagates it. This is deliberate;
//!   callers observe the arithmetic's own domain behavior.
//!
//! ## Invariants
//!
//! * `angle(a, b) == angle(b, a)` for all same-dimension operands.
//! * `angle(v, v)` is 0 (within floating tolerance) for any non-zero `v`.
//!
//! ## Non-goals
//!
//! * This module does not special-case zero vectors.
//! * This module does not validate dimensions itself; that check lives in
//!   [`Vector::dot`](crate::primitives::vector::Vector::dot) and is shared.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ThetaError;
use crate::primitives::vector::Vector;

// ============================================================================
// Angle Computation
// ============================================================================

/// Angle theta between `a` and `b`, in radians.
///
/// Computed as `acos(dot(a, b) / (a.norm() * b.norm()))`. Fails with
/// [`ThetaError::DimensionMismatch`] when the operands differ in dimension;
/// a zero-norm operand yields NaN rather than an error.
pub fn angle<T: Float>(a: &Vector<T>, b: &Vector<T>) -> Result<T, ThetaError> {
    let dot = a.dot(b)?;
    Ok((dot / (a.norm() * b.norm())).acos())
}
