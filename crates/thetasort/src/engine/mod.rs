//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer handles orchestration and the dataset boundary: parsing text
//! into vectors, running the staged pipeline, and packaging results.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Text ingestion and token policy.
pub mod ingest;

/// Pipeline orchestration.
pub mod executor;

/// Result structures and rendering.
pub mod output;
