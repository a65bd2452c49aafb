//! # regula-pipeline
//!
//! Request orchestration: one call runs expansion, hybrid retrieval,
//! grounded generation, and the conditional fallback tier, under an
//! optional outer deadline.
//!
//! - **Terminal states**: cited answer, refused-not-found (with optional
//!   fallback sources), refused-timeout, refused-no-fallback
//! - **Error split**: infrastructure failure (index outage) is an `Err`;
//!   everything user-visible is an `Ok` state
//! - **Tracing**: each request runs inside an `info_span!` keyed by a
//!   fresh request id
//!
//! The entry point is [`AnswerPipeline`], which borrows the three
//! collaborator traits from `regula_core::traits`.

pub mod engine;

mod context;

pub use engine::AnswerPipeline;
