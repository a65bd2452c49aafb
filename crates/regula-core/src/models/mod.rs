pub mod answer;
pub mod candidate;
pub mod change;
pub mod citation;
pub mod fallback;
pub mod fused;
pub mod generation;
pub mod outcome;
pub mod query;

pub use answer::AnswerResult;
pub use candidate::ScoredCandidate;
pub use change::{ChangeEntry, ChangeKind, ChangeReport, ChangeSummary};
pub use citation::Citation;
pub use fallback::{FallbackResult, FallbackSource, WebHit};
pub use fused::FusedResult;
pub use generation::GenerationOptions;
pub use outcome::ResolvedAnswer;
pub use query::QueryVariant;
