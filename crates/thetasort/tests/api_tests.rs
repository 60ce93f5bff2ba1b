//! Tests for the high-level builder API and end-to-end pipeline.
//!
//! These tests verify the fluent builder, the configured model, and the
//! rendered output contract:
//! - Builder defaults and validation
//! - Duplicate-parameter detection
//! - End-to-end runs over text and pre-split lines
//! - `ThetaResult` metadata and Display rendering
//!
//! ## Test Organization
//!
//! 1. **Builder** - Defaults, configuration, misuse
//! 2. **End-to-End** - Full pipeline over the reference dataset
//! 3. **Rendering** - Exact presentation format
//! 4. **Failure Modes** - Errors surface through the model

use approx::assert_abs_diff_eq;

use thetasort::prelude::*;

const REFERENCE_INPUT: &str = "1 2 3\n4 5 6\n7 8 9\n10 11 12\n13 14 15";

// ============================================================================
// Builder Tests
// ============================================================================

/// The default model uses the permissive token policy.
#[test]
fn test_builder_defaults() {
    let model = ThetaSort::new().build().unwrap();
    assert_eq!(model.token_policy, Permissive);
}

/// Explicit configuration is honored.
#[test]
fn test_builder_configuration() {
    let model = ThetaSort::new().token_policy(Strict).build().unwrap();
    assert_eq!(model.token_policy, Strict);
}

/// Setting a parameter twice is caught at build time.
#[test]
fn test_builder_duplicate_parameter() {
    let err = ThetaSort::new()
        .token_policy(Strict)
        .token_policy(Permissive)
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        ThetaError::DuplicateParameter {
            parameter: "token_policy",
        }
    );
}

// ============================================================================
// End-to-End Tests
// ============================================================================

/// The full pipeline over the reference dataset: 10 pairs, angles
/// non-decreasing, metadata populated.
#[test]
fn test_end_to_end_reference() {
    let model = ThetaSort::new().build().unwrap();
    let result: ThetaResult<f64> = model.run(REFERENCE_INPUT).unwrap();

    assert_eq!(result.vector_count, 5);
    assert_eq!(result.dimension, 3);
    assert_eq!(result.len(), 10);
    assert!(!result.is_empty());

    let mut last = 0.0;
    for entry in result.iter() {
        assert!(last <= entry.theta);
        last = entry.theta;
    }

    assert_abs_diff_eq!(result.pairs[0].theta, 0.0158359, epsilon = 1e-5);
    assert_abs_diff_eq!(result.pairs[9].theta, 0.329341, epsilon = 1e-5);
}

/// run_lines matches run over the equivalent text.
#[test]
fn test_run_lines_matches_run() {
    let model = ThetaSort::new().build().unwrap();

    let from_text: ThetaResult<f64> = model.run(REFERENCE_INPUT).unwrap();
    let from_lines: ThetaResult<f64> = model.run_lines(REFERENCE_INPUT.lines()).unwrap();

    assert_eq!(from_text, from_lines);
}

/// Empty input runs to an empty result.
#[test]
fn test_empty_input() {
    let model = ThetaSort::new().build().unwrap();
    let result: ThetaResult<f64> = model.run("").unwrap();

    assert_eq!(result.vector_count, 0);
    assert_eq!(result.dimension, 0);
    assert!(result.is_empty());
    assert_eq!(format!("{result}"), "");
}

// ============================================================================
// Rendering Tests
// ============================================================================

/// Presentation renders one `θ(<vec1>, <vec2>) = <angle>` line per pair,
/// in sorted order, with six fixed decimal digits.
#[test]
fn test_display_rendering() {
    let model = ThetaSort::new().build().unwrap();
    let result: ThetaResult<f64> = model.run("1 0\n0 1").unwrap();

    assert_eq!(format!("{result}"), "θ([1, 0], [0, 1]) = 1.570796\n");
}

/// Sorted multi-pair rendering keeps ascending-angle line order.
#[test]
fn test_display_rendering_sorted() {
    let model = ThetaSort::new().build().unwrap();
    let result: ThetaResult<f64> = model.run("1 2 3\n4 5 6\n7 8 9").unwrap();

    let expect = "θ([4, 5, 6], [7, 8, 9]) = 0.060161\n\
                  θ([1, 2, 3], [4, 5, 6]) = 0.225726\n\
                  θ([1, 2, 3], [7, 8, 9]) = 0.285887\n";
    assert_eq!(format!("{result}"), expect);
}

// ============================================================================
// Failure Mode Tests
// ============================================================================

/// Ingestion errors surface unchanged through the model.
#[test]
fn test_errors_propagate() {
    let model = ThetaSort::new().build().unwrap();

    assert_eq!(
        model.run::<f64>("1 2 3\n4 5").unwrap_err(),
        ThetaError::DimensionMismatch { expected: 3, got: 2 }
    );

    let strict = ThetaSort::new().token_policy(Strict).build().unwrap();
    assert_eq!(
        strict.run::<f64>("1 x").unwrap_err(),
        ThetaError::UnparsableToken {
            line: 1,
            token: "x".to_string(),
        }
    );
}
