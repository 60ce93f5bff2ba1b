//! The n-dimensional vector value type.
//!
//! ## Purpose
//!
//! This module provides `Vector<T>`, a fixed-at-runtime-length ordered
//! sequence of real numbers with the numeric operations the pipeline needs:
//! Euclidean norm, dot product, and exact element-wise equality.
//!
//! ## Design notes
//!
//! * **Value semantics**: Vectors are immutable after construction; stages
//!   clone or move them freely with no shared ownership.
//! * **Closed surface**: The inner `Vec<T>` is never exposed mutably. Only
//!   construction, read access, and the numeric operations are public.
//! * **Generics**: Operations are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Dimension**: The element count. Combining operations require both
//!   operands to share it and fail with `DimensionMismatch` otherwise.
//! * **Rendering**: `Display` produces `[e0, e1, ..., en-1]`; the empty
//!   vector renders as `[]`.
//!
//! ## Invariants
//!
//! * `norm()` is non-negative and never fails; the empty vector has norm 0.
//! * `dot()` never truncates or zero-pads: unequal dimensions are an error.
//! * Equality is exact, not tolerance-based.
//!
//! ## Non-goals
//!
//! * This module does not compute angles (see `math::angle`).
//! * This module does not parse text (see `engine::ingest`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::ops::Index;
use core::slice::Iter;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ThetaError;

// ============================================================================
// Vector Type
// ============================================================================

/// An ordered, fixed-length sequence of real numbers.
///
/// Equality is element-wise and exact. The type is a pure value: once
/// constructed it cannot be mutated, only read, cloned, or consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    elements: Vec<T>,
}

impl<T: Float> Vector<T> {
    /// Create a vector from its elements.
    pub fn new(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// The vector's dimension (element count).
    #[inline]
    pub fn dim(&self) -> usize {
        self.elements.len()
    }

    /// Whether the vector has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Read-only view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.elements.iter()
    }

    // ========================================================================
    // Numeric Operations
    // ========================================================================

    /// Euclidean norm: the square root of the vector's dot product with
    /// itself. Never fails; the empty vector has norm zero.
    pub fn norm(&self) -> T {
        self.elements
            .iter()
            .fold(T::zero(), |acc, &e| acc + e * e)
            .sqrt()
    }

    /// Dot product with another vector of the same dimension.
    ///
    /// Summation runs in element order, so the result is deterministic for
    /// a given pair of operands. Unequal dimensions fail with
    /// [`ThetaError::DimensionMismatch`]; elements are never truncated or
    /// zero-padded to force a fit.
    pub fn dot(&self, other: &Self) -> Result<T, ThetaError> {
        if self.dim() != other.dim() {
            return Err(ThetaError::DimensionMismatch {
                expected: self.dim(),
                got: other.dim(),
            });
        }

        Ok(self
            .elements
            .iter()
            .zip(other.elements.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }
}

impl<T: Float> From<Vec<T>> for Vector<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T: Float> From<&[T]> for Vector<T> {
    fn from(elements: &[T]) -> Self {
        Self::new(elements.to_vec())
    }
}

impl<T: Float> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Vector<T> {
    /// Render as `[e0, e1, ..., en-1]`; the empty vector renders as `[]`.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "[")?;
        for (i, e) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, "]")
    }
}
