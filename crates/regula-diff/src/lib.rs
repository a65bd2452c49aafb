//! # regula-diff
//!
//! Passage-level change detection between two versions of one regulation:
//!
//! - **Exact tier**: identical content fingerprints are unchanged and leave
//!   the report entirely
//! - **Similarity tier**: edit-distance pairing, bounded by section anchors
//! - **Determinism**: greedy assignment over a total order; reports are
//!   byte-for-byte reproducible
//!
//! The entry point is [`DiffEngine`]. An independent batch pipeline, not
//! part of the live query path.

pub mod engine;
pub mod similarity;

pub use engine::DiffEngine;
