/// Grounding subsystem errors.
///
/// Citation failures are internal consistency violations: the grounding
/// layer logs them for audit and converts them to a refusal, never exposing
/// them to the end user.
#[derive(Debug, thiserror::Error)]
pub enum GroundingError {
    #[error("citation marker [{marker}] outside passage range 1..={passage_count}")]
    CitationIntegrity {
        marker: String,
        passage_count: usize,
    },

    #[error("response carries no citation markers")]
    UncitedResponse,

    #[error("generation failed: {reason}")]
    GenerationFailed { reason: String },
}
