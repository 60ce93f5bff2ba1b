//! Output types and result structures for the angle pipeline.
//!
//! ## Purpose
//!
//! This module defines the `ThetaResult` struct which carries the final
//! angle-ordered pair sequence along with dataset metadata, and renders it
//! for presentation.
//!
//! ## Design notes
//!
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//! * **Single rendering routine**: One consistent textual form; there are no
//!   alternate formatting back-ends.
//!
//! ## Key concepts
//!
//! * **Rendering**: One line per pair, in sorted order, of the form
//!   `θ([a0, a1], [b0, b1]) = 0.123457` with the angle in fixed-point
//!   notation with six decimal digits.
//!
//! ## Invariants
//!
//! * `pairs` is sorted by non-decreasing angle.
//! * `dimension` is the common dimension of every source vector (0 for an
//!   empty dataset).
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not write to files or stdout; callers own the sink.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::slice::Iter;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::sort::AnglePair;

// ============================================================================
// Result Structure
// ============================================================================

/// Final output of the pipeline: the angle-sorted pair sequence plus
/// dataset metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ThetaResult<T> {
    /// Number of vectors ingested.
    pub vector_count: usize,

    /// Common dimension shared by every ingested vector.
    pub dimension: usize,

    /// All unique pairs, sorted by ascending angle.
    pub pairs: Vec<AnglePair<T>>,
}

impl<T: Float> ThetaResult<T> {
    /// Number of pairs in the result.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the result holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the sorted pairs.
    pub fn iter(&self) -> Iter<'_, AnglePair<T>> {
        self.pairs.iter()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for ThetaResult<T> {
    /// One line per pair, in sorted order: `θ(<vec1>, <vec2>) = <angle>`.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for entry in &self.pairs {
            writeln!(
                f,
                "θ({}, {}) = {:.6}",
                entry.pair.first, entry.pair.second, entry.theta
            )?;
        }
        Ok(())
    }
}
