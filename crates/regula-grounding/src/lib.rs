//! # regula-grounding
//!
//! The grounding assembler: turns ranked passages into a citation-bearing
//! answer or a refusal, never an uncited claim.
//!
//! - **Prompt building**: numbered passage blocks under a fixed instruction
//! - **Marker validation**: strict `[n]` parsing against the supplied range
//! - **Refusal policy**: insufficiency, uncited, or out-of-range responses
//!   all collapse to `Refused`, with an audit log for integrity violations
//!
//! The entry point is [`GroundingEngine`], which borrows an
//! [`IGenerator`](regula_core::traits::IGenerator) implementation.

pub mod citations;
pub mod engine;
pub mod prompt;

pub use engine::GroundingEngine;
