//! Fallback resolution: one timed web-search attempt, then the curated
//! table, then an explicit nothing.
//!
//! The resolver never fails. Web-search errors and timeouts are consumed
//! here by falling through to the curated tier, and a curated miss is the
//! valid terminal value [`FallbackResult::NoFallback`].

use std::time::Duration;

use regula_core::config::FallbackConfig;
use regula_core::models::{FallbackResult, FallbackSource, WebHit};
use regula_core::passage::RegulationTag;
use regula_core::traits::IWebSearch;
use tracing::{debug, warn};

use crate::curated;

/// Resolves a refused question against external sources.
pub struct FallbackEngine<'a> {
    web: &'a dyn IWebSearch,
    config: FallbackConfig,
}

impl<'a> FallbackEngine<'a> {
    pub fn new(web: &'a dyn IWebSearch, config: FallbackConfig) -> Self {
        Self { web, config }
    }

    /// Resolve a question the grounded path refused.
    ///
    /// The single web-search attempt runs under `web_timeout_ms`; on expiry
    /// the future is dropped, cancelling the in-flight call. No retries:
    /// failure, timeout, and an empty hit list all fall through to the
    /// curated table identically.
    pub async fn resolve(&self, query: &str, filter: Option<&RegulationTag>) -> FallbackResult {
        if let Some(answer) = self.web_answer(query).await {
            return answer;
        }
        match curated::lookup(filter, query) {
            Some(sources) => {
                debug!(sources = sources.len(), "serving curated sources");
                FallbackResult::CuratedAnswer { sources }
            }
            None => FallbackResult::NoFallback,
        }
    }

    async fn web_answer(&self, query: &str) -> Option<FallbackResult> {
        // Over-fetch so trusted hits beyond the cap can still displace
        // untrusted ones after reordering.
        let limit = self.config.max_sources * 2;
        let timeout = Duration::from_millis(self.config.web_timeout_ms);

        let hits = match tokio::time::timeout(timeout, self.web.search(query, limit)).await {
            Ok(Ok(hits)) => hits,
            Ok(Err(err)) => {
                warn!(error = %err, "web search failed; falling back to curated sources");
                return None;
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.config.web_timeout_ms,
                    "web search timed out; falling back to curated sources"
                );
                return None;
            }
        };

        if hits.is_empty() {
            debug!("web search returned no hits");
            return None;
        }
        Some(self.digest(hits))
    }

    /// Turn raw hits into a `WebAnswer`: trusted domains first (stable
    /// within each class), truncated to `max_sources`, with a bulleted
    /// digest. Never styled as a cited answer.
    fn digest(&self, hits: Vec<WebHit>) -> FallbackResult {
        let mut sources: Vec<FallbackSource> = hits
            .into_iter()
            .map(|hit| FallbackSource {
                trusted: curated::is_trusted(&hit.url),
                title: hit.title,
                url: hit.url,
                description: hit.snippet,
            })
            .collect();
        sources.sort_by_key(|source| !source.trusted);
        sources.truncate(self.config.max_sources);

        let text = sources
            .iter()
            .map(|source| format!("• {}: {}", source.title, source.description))
            .collect::<Vec<_>>()
            .join("\n");

        debug!(
            sources = sources.len(),
            trusted = sources.iter().filter(|s| s.trusted).count(),
            "web search produced a fallback digest"
        );
        FallbackResult::WebAnswer { text, sources }
    }
}
