//! High-level API for the pairwise-angle pipeline.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the pipeline and a model type that runs it
//! over input text.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called;
//!   duplicate parameter settings are recorded during configuration and
//!   surfaced there.
//! * **Type-Safe**: Execution is generic over `Float` types.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ThetaSortBuilder`] via `ThetaSort::new()`.
//! 2. Optionally chain configuration methods (`.token_policy()`).
//! 3. Call `.build()` to obtain a [`ThetaSortModel`], then `.run()` it.
//!
//! ```rust
//! use thetasort::prelude::*;
//!
//! let model = ThetaSort::new().token_policy(Strict).build()?;
//! let result: ThetaResult<f64> = model.run("1 2 3\n4 5 6")?;
//!
//! for entry in result.iter() {
//!     println!("θ = {:.6}", entry.theta);
//! }
//! # Result::<(), ThetaError>::Ok(())
//! ```

// External dependencies
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor;

// Publicly re-exported types
pub use crate::algorithms::pairs::{VectorPair, pairwise_elts};
pub use crate::algorithms::sort::{AnglePair, theta_sort};
pub use crate::engine::ingest::{TokenPolicy, ingest, ingest_lines};
pub use crate::engine::output::ThetaResult;
pub use crate::math::angle::angle;
pub use crate::primitives::errors::ThetaError;
pub use crate::primitives::vector::Vector;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring the pairwise-angle pipeline.
#[derive(Debug, Clone, Default)]
pub struct ThetaSortBuilder {
    /// Token handling policy for ingestion.
    pub token_policy: Option<TokenPolicy>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl ThetaSortBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            token_policy: None,
            duplicate_param: None,
        }
    }

    /// Set the token handling policy (default: `Permissive`).
    pub fn token_policy(mut self, policy: TokenPolicy) -> Self {
        if self.token_policy.is_some() {
            self.duplicate_param = Some("token_policy");
        }
        self.token_policy = Some(policy);
        self
    }

    /// Validate the configuration and produce a runnable model.
    pub fn build(self) -> Result<ThetaSortModel, ThetaError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(ThetaError::DuplicateParameter { parameter });
        }

        Ok(ThetaSortModel {
            token_policy: self.token_policy.unwrap_or_default(),
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A configured pipeline, ready to run over input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThetaSortModel {
    /// Token handling policy used during ingestion.
    pub token_policy: TokenPolicy,
}

impl ThetaSortModel {
    /// Run the pipeline over a complete input text (one vector per line).
    pub fn run<T>(&self, input: &str) -> Result<ThetaResult<T>, ThetaError>
    where
        T: Float + FromStr,
    {
        executor::run(input, self.token_policy)
    }

    /// Run the pipeline over an iterator of already-split lines.
    pub fn run_lines<'a, I, T>(&self, lines: I) -> Result<ThetaResult<T>, ThetaError>
    where
        I: IntoIterator<Item = &'a str>,
        T: Float + FromStr,
    {
        let vectors = ingest_lines(lines, self.token_policy)?;
        executor::run_vectors(vectors)
    }
}
