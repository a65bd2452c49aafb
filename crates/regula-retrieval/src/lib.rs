//! # regula-retrieval
//!
//! Hybrid retrieval over a compliance passage index:
//!
//! - **Query expansion**: compliance synonym table + regulation-name variant
//! - **Hybrid search**: keyword and semantic searches per variant, in parallel
//! - **Fusion**: per-method min-max normalization, alpha blend, dedup
//!
//! The entry point is [`RetrievalEngine`], which borrows an
//! [`IPassageIndex`](regula_core::traits::IPassageIndex) implementation and
//! returns ranked [`FusedResult`](regula_core::models::FusedResult)s.

pub mod engine;
pub mod expansion;
pub mod search;

pub use engine::RetrievalEngine;
pub use expansion::{expand, SynonymTable};
