//! Text ingestion of vector datasets.
//!
//! ## Purpose
//!
//! This module parses whitespace-delimited rows of real numbers into a
//! sequence of vectors, enforcing that every row shares the dimension of
//! the first.
//!
//! ## Design notes
//!
//! * **Fail-fast**: The first dimension violation aborts ingestion; no
//!   partially-validated sequence is handed back.
//! * **Line independence**: Each line is parsed on its own; a line's vector
//!   is exactly the tokens it contributes under the active policy.
//! * **Policy choice**: Token handling is configurable. `Permissive` mirrors
//!   formatted-stream extraction (stop at the first unparseable token,
//!   silently); `Strict` turns such a token into an error with line and
//!   token context.
//!
//! ## Key concepts
//!
//! * **Dimension anchor**: The first parsed vector fixes the expected
//!   dimension for the rest of the dataset.
//! * **Empty lines**: Every input line yields a vector, so a blank line
//!   yields the empty vector and participates in the dimension check like
//!   any other row.
//!
//! ## Invariants
//!
//! * On success, all returned vectors share one dimension and appear in
//!   input-line order.
//! * Empty input yields an empty sequence, not an error.
//!
//! ## Non-goals
//!
//! * This module does not open files or read streams; callers supply text.
//! * This module does not enumerate pairs or sort.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ThetaError;
use crate::primitives::vector::Vector;

// ============================================================================
// Token Policy
// ============================================================================

/// How ingestion treats a token that does not parse as a real number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenPolicy {
    /// Stop parsing the line at the first unparseable token, keeping the
    /// numbers read so far. Matches formatted-stream extraction semantics.
    #[default]
    Permissive,

    /// Fail the whole ingestion with [`ThetaError::UnparsableToken`].
    Strict,
}

// ============================================================================
// Ingestion
// ============================================================================

/// Parse a whole input text into a sequence of vectors, one per line.
///
/// The first parsed vector establishes the expected dimension; any later
/// line whose vector differs in dimension aborts with
/// [`ThetaError::DimensionMismatch`]. Input-line order is preserved.
pub fn ingest<T>(input: &str, policy: TokenPolicy) -> Result<Vec<Vector<T>>, ThetaError>
where
    T: Float + FromStr,
{
    ingest_lines(input.lines(), policy)
}

/// Parse an iterator of text lines into a sequence of vectors.
///
/// Same contract as [`ingest`]; useful when lines arrive from a reader or
/// are already split.
pub fn ingest_lines<'a, I, T>(lines: I, policy: TokenPolicy) -> Result<Vec<Vector<T>>, ThetaError>
where
    I: IntoIterator<Item = &'a str>,
    T: Float + FromStr,
{
    let mut vectors: Vec<Vector<T>> = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let vector = parse_line(line, index + 1, policy)?;

        if let Some(first) = vectors.first() {
            if first.dim() != vector.dim() {
                return Err(ThetaError::DimensionMismatch {
                    expected: first.dim(),
                    got: vector.dim(),
                });
            }
        }

        vectors.push(vector);
    }

    Ok(vectors)
}

/// Parse one line's maximal run of whitespace-separated numeric tokens.
fn parse_line<T>(line: &str, line_no: usize, policy: TokenPolicy) -> Result<Vector<T>, ThetaError>
where
    T: Float + FromStr,
{
    let mut elements = Vec::new();

    for token in line.split_whitespace() {
        match token.parse::<T>() {
            Ok(value) => elements.push(value),
            Err(_) => match policy {
                TokenPolicy::Permissive => break,
                TokenPolicy::Strict => {
                    return Err(ThetaError::UnparsableToken {
                        line: line_no,
                        token: token.to_string(),
                    });
                }
            },
        }
    }

    Ok(Vector::new(elements))
}
