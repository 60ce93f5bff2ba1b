//! Unique-pair enumeration over a vector sequence.
//!
//! ## Purpose
//!
//! This module produces every unordered pair of distinct vectors from an
//! ordered sequence, exactly once each.
//!
//! ## Design notes
//!
//! * **Deterministic order**: Pairs are emitted in lexicographic (i, j)
//!   index order. This order is the tie-break basis for the angle sort.
//! * **Owned pairs**: Each pair owns clones of its two source vectors;
//!   vectors are cheap values, and owning them keeps the downstream stages
//!   free of borrow plumbing.
//!
//! ## Key concepts
//!
//! * **Unique pair**: (i, j) with i < j. A pair's identity is the unordered
//!   combination of its two source vectors; no vector is paired with itself.
//!
//! ## Invariants
//!
//! * For N input vectors, exactly N·(N−1)/2 pairs are produced (0 when N < 2).
//! * Enumeration order is stable and reproducible across runs.
//!
//! ## Non-goals
//!
//! * This module does not compute angles or sort (see `algorithms::sort`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::angle::angle;
use crate::primitives::errors::ThetaError;
use crate::primitives::vector::Vector;

// ============================================================================
// Pair Type
// ============================================================================

/// An ordered 2-tuple of vectors representing an unordered combination.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorPair<T> {
    /// Earlier vector in enumeration order.
    pub first: Vector<T>,

    /// Later vector in enumeration order.
    pub second: Vector<T>,
}

impl<T: Float> VectorPair<T> {
    /// Angle theta between the pair's two vectors.
    pub fn theta(&self) -> Result<T, ThetaError> {
        angle(&self.first, &self.second)
    }
}

// ============================================================================
// Enumeration
// ============================================================================

/// All unique pairs of distinct vectors in `vecs`, excluding pairs of the
/// same element, in lexicographic (i, j) order.
pub fn pairwise_elts<T: Float>(vecs: &[Vector<T>]) -> Vec<VectorPair<T>> {
    let mut pairs = Vec::with_capacity(vecs.len() * vecs.len().saturating_sub(1) / 2);

    for (i, first) in vecs.iter().enumerate() {
        for second in &vecs[i + 1..] {
            pairs.push(VectorPair {
                first: first.clone(),
                second: second.clone(),
            });
        }
    }

    pairs
}
