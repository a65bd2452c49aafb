use serde::{Deserialize, Serialize};

use super::answer::AnswerResult;
use super::fallback::FallbackResult;

/// Terminal pipeline output for one question.
///
/// `fallback` is populated only when the grounded path refused for lack of
/// local evidence; its sources stay separate from the numbered citations.
/// The closed set of user-visible states: a cited answer, refused-not-found
/// (with optional external sources), refused-timeout, or refused with
/// `NoFallback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAnswer {
    pub answer: AnswerResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackResult>,
}

impl ResolvedAnswer {
    /// An answered result, no fallback involved.
    pub fn answered(answer: AnswerResult) -> Self {
        Self {
            answer,
            fallback: None,
        }
    }
}
