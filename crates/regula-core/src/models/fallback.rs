use serde::{Deserialize, Serialize};

/// A raw web-search result row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// An external source surfaced by the fallback tier.
///
/// Kept apart from [`super::Citation`]: fallback sources are never merged
/// into the numbered citation sequence of an answered result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackSource {
    pub title: String,
    pub url: String,
    pub description: String,
    /// Whether the source domain is on the trusted list.
    pub trusted: bool,
}

/// Outcome of the fallback resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FallbackResult {
    /// Live web search succeeded within the timeout.
    WebAnswer {
        /// Bulleted digest of the kept hits; never styled as a cited answer.
        text: String,
        sources: Vec<FallbackSource>,
    },
    /// Web search failed or timed out; curated static sources substituted.
    CuratedAnswer { sources: Vec<FallbackSource> },
    /// Neither tier produced anything. A valid terminal state, not a bug:
    /// the caller surfaces it as an explicit "no answer available".
    NoFallback,
}
