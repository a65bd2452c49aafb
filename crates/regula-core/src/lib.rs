//! # regula-core
//!
//! Foundation crate for the Regula compliance pipeline: the passage data
//! model, result types, error taxonomy, configuration, and the collaborator
//! traits behind which the index, generator, and web search live. The other
//! workspace members build on these definitions and add no types of their
//! own to the wire.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod passage;
pub mod traits;

// Flatten the high-traffic types into the crate root.
pub use config::RegulaConfig;
pub use errors::{RegulaError, RegulaResult};
pub use models::{
    AnswerResult, ChangeEntry, ChangeKind, ChangeReport, Citation, FallbackResult, FusedResult,
    QueryVariant, ResolvedAnswer, ScoredCandidate,
};
pub use passage::{Passage, PassageLocation, RegulationTag};
