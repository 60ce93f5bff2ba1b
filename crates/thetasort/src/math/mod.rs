//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical functions built on top of the
//! vector primitive. These are reusable building blocks with no pipeline
//! logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Angle (theta) between two vectors.
pub mod angle;
