//! # thetasort — angle-ordered pairwise vector comparison
//!
//! Reads whitespace-delimited rows of real numbers as vectors in
//! n-dimensional space, computes the angle between every unordered pair of
//! distinct vectors, and reports the pairs sorted by ascending angle.
//!
//! ## Quick Start
//!
//! ```rust
//! use thetasort::prelude::*;
//!
//! let input = "1 2 3\n4 5 6\n7 8 9";
//!
//! // Build the model
//! let model = ThetaSort::new().build()?;
//!
//! // Run the pipeline
//! let result: ThetaResult<f64> = model.run(input)?;
//!
//! // Pairs arrive sorted by ascending angle
//! println!("{}", result);
//! # Result::<(), ThetaError>::Ok(())
//! ```
//!
//! ```text
//! θ([4, 5, 6], [7, 8, 9]) = 0.060161
//! θ([1, 2, 3], [4, 5, 6]) = 0.225726
//! θ([1, 2, 3], [7, 8, 9]) = 0.285887
//! ```
//!
//! ## Pipeline
//!
//! Text stream → ingestion → vectors → pair enumeration → angle sort →
//! ordered (pair, angle) sequence. Each stage fully materializes before the
//! next begins, and every vector is an immutable value.
//!
//! All vectors in one dataset must share a dimension; combining or ingesting
//! vectors of differing dimension fails with
//! [`ThetaError::DimensionMismatch`](prelude::ThetaError::DimensionMismatch).
//! Any error aborts the whole run — there is no partial-success mode.
//!
//! ## Result and Error Handling
//!
//! `run` returns `Result<ThetaResult<T>, ThetaError>`; the `?` operator is
//! idiomatic, or match explicitly:
//!
//! ```rust
//! use thetasort::prelude::*;
//!
//! let model = ThetaSort::new().build()?;
//!
//! match model.run::<f64>("1 2\n3 4 5") {
//!     Ok(result) => println!("{} pairs", result.len()),
//!     Err(e) => eprintln!("ingestion failed: {}", e),
//! }
//! # Result::<(), ThetaError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! thetasort = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - the vector value type and shared errors.
mod primitives;

// Layer 2: Math - pure angle computation.
mod math;

// Layer 3: Algorithms - pair enumeration and angle-ordered sorting.
mod algorithms;

// Layer 4: Engine - ingestion, orchestration, and output packaging.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        AnglePair, ThetaError, ThetaResult, ThetaSortBuilder as ThetaSort, ThetaSortModel,
        TokenPolicy::{Permissive, Strict},
        Vector, VectorPair, angle, ingest, ingest_lines, pairwise_elts, theta_sort,
    };
}
