//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the combinatorial core of the pipeline: unique-pair
//! enumeration and the stable angle-ordered sort.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unique-pair enumeration.
pub mod pairs;

/// Angle-ordered stable sorting.
pub mod sort;
