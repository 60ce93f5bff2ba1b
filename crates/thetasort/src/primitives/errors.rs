//! Error types for pairwise-angle operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while ingesting
//! vectors, combining them (dot product / angle), or configuring the builder.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected dimensions).
//! * **Deferred**: Builder misuse is caught during configuration and surfaced at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Dimension enforcement**: One error kind covers both the per-pair check
//!    and the whole-dataset ingestion check.
//! 2. **Strict parsing**: `UnparsableToken` is only produced under
//!    `TokenPolicy::Strict`; the permissive default never parse-errors.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Every error is fatal to the operation in progress; there is no recovery path.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for pairwise-angle operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThetaError {
    /// Two vectors of differing dimension were combined, or an ingested
    /// vector's dimension differs from the first vector in the dataset.
    DimensionMismatch {
        /// Dimension expected (left operand, or the dataset's first vector).
        expected: usize,
        /// Dimension actually encountered.
        got: usize,
    },

    /// A token could not be parsed as a real number (strict ingestion only).
    UnparsableToken {
        /// One-based input line the token appeared on.
        line: usize,
        /// The offending token text.
        token: String,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ThetaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DimensionMismatch { expected, got } => {
                write!(
                    f,
                    "Dimension mismatch: expected {expected}-dimensional vector, got {got}"
                )
            }
            Self::UnparsableToken { line, token } => {
                write!(f, "Unparsable token '{token}' on line {line}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ThetaError {}
