//! Angle-ordered sorting of vector pairs.
//!
//! ## Purpose
//!
//! This module computes the angle for every enumerated pair and reorders the
//! sequence by ascending angle.
//!
//! ## Design notes
//!
//! * **Stability**: Uses a stable sort so that pairs with equal angles keep
//!   their relative enumeration order.
//! * **Cached keys**: Each angle is computed exactly once, before sorting,
//!   and carried alongside its pair. Errors therefore surface before any
//!   reordering happens, and the comparator never recomputes.
//! * **Non-finite keys**: NaN angles (zero-norm operands) compare as equal
//!   to their neighbors, preserving enumeration order among them.
//!
//! ## Key concepts
//!
//! * **Fail-fast**: A single `DimensionMismatch` during key computation
//!   aborts the whole sort; there is no partial or best-effort result.
//!
//! ## Invariants
//!
//! * Output angles are non-decreasing from first to last.
//! * Equal-angle runs appear in enumeration order.
//! * The output is a permutation of the enumeration-order pair sequence.
//!
//! ## Non-goals
//!
//! * This module does not enumerate pairs (see `algorithms::pairs`).
//! * This module does not render results (see `engine::output`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::pairs::{VectorPair, pairwise_elts};
use crate::primitives::errors::ThetaError;
use crate::primitives::vector::Vector;

// ============================================================================
// Keyed Pair Type
// ============================================================================

/// A vector pair together with its cached angle.
#[derive(Debug, Clone, PartialEq)]
pub struct AnglePair<T> {
    /// The pair of vectors.
    pub pair: VectorPair<T>,

    /// Angle theta between the pair's vectors, in radians.
    pub theta: T,
}

// ============================================================================
// Sorting
// ============================================================================

/// Enumerate all unique pairs of `vecs` and return them sorted by ascending
/// angle.
///
/// 1. Enumerates pairs in lexicographic (i, j) order.
/// 2. Computes each pair's angle once; any `DimensionMismatch` aborts here.
/// 3. Stable-sorts on the cached keys, so ties keep enumeration order.
pub fn theta_sort<T: Float>(vecs: &[Vector<T>]) -> Result<Vec<AnglePair<T>>, ThetaError> {
    let mut keyed = pairwise_elts(vecs)
        .into_iter()
        .map(|pair| {
            let theta = pair.theta()?;
            Ok(AnglePair { pair, theta })
        })
        .collect::<Result<Vec<_>, ThetaError>>()?;

    // Stable sort; NaN keys fall back to Equal to keep enumeration order
    keyed.sort_by(|a, b| a.theta.partial_cmp(&b.theta).unwrap_or(Ordering::Equal));

    Ok(keyed)
}
