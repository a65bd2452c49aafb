/// Fallback subsystem errors, internal to the web-search leg.
///
/// Both variants are consumed inside the resolver by falling through to the
/// curated tier; "no fallback available" is a value (`FallbackResult::
/// NoFallback`), not an error.
#[derive(Debug, thiserror::Error)]
pub enum FallbackError {
    #[error("web search failed: {reason}")]
    SearchFailed { reason: String },

    #[error("web search timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },
}
