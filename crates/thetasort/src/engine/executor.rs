//! Pipeline orchestration.
//!
//! ## Purpose
//!
//! This module wires the stages together: ingestion, pair enumeration, and
//! the angle-ordered sort, producing a [`ThetaResult`].
//!
//! ## Design notes
//!
//! * **Fully materialized**: Each stage consumes the complete, immutable
//!   output of the previous stage. Ingestion finishes before enumeration
//!   starts; enumeration finishes before sorting starts.
//! * **Single-threaded**: The pipeline is purely synchronous with no shared
//!   mutable state between stages.
//! * **Fail-fast**: Any error in any stage aborts the whole run; there is no
//!   partial-success mode.
//!
//! ## Non-goals
//!
//! * This module does not open files or format output.
//! * This module does not validate builder parameters (see `api`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::sort::theta_sort;
use crate::engine::ingest::{TokenPolicy, ingest};
use crate::engine::output::ThetaResult;
use crate::primitives::errors::ThetaError;
use crate::primitives::vector::Vector;

// ============================================================================
// Pipeline
// ============================================================================

/// Run the full pipeline over input text: ingest, enumerate, sort.
pub fn run<T>(input: &str, policy: TokenPolicy) -> Result<ThetaResult<T>, ThetaError>
where
    T: Float + FromStr,
{
    let vectors = ingest(input, policy)?;
    run_vectors(vectors)
}

/// Run the enumeration and sort stages over an already-ingested sequence.
pub fn run_vectors<T: Float>(vectors: Vec<Vector<T>>) -> Result<ThetaResult<T>, ThetaError> {
    let pairs = theta_sort(&vectors)?;

    Ok(ThetaResult {
        vector_count: vectors.len(),
        dimension: vectors.first().map(Vector::dim).unwrap_or(0),
        pairs,
    })
}
