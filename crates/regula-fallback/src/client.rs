//! Web-search client against a SearxNG-compatible JSON endpoint.
//!
//! The only transport-aware piece of the crate.
//! [`FallbackEngine`](crate::engine::FallbackEngine) owns the timeout and
//! drops the future on expiry, so this client just searches; connection and
//! decoding failures map to [`FallbackError::SearchFailed`].

use async_trait::async_trait;
use regula_core::errors::{FallbackError, RegulaResult};
use regula_core::models::WebHit;
use regula_core::traits::IWebSearch;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchRow>,
}

#[derive(Debug, Deserialize)]
struct SearchRow {
    #[serde(default)]
    title: String,
    url: String,
    #[serde(default)]
    content: String,
}

/// `IWebSearch` implementation over `GET {base_url}/search?q=…&format=json`.
pub struct SearchApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl SearchApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl IWebSearch for SearchApiClient {
    async fn search(&self, query: &str, limit: usize) -> RegulaResult<Vec<WebHit>> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("format", "json")])
            .send()
            .await
            .map_err(|e| FallbackError::SearchFailed {
                reason: format!("request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FallbackError::SearchFailed {
                reason: format!("search endpoint returned {status}"),
            }
            .into());
        }

        let parsed: SearchResponse =
            response
                .json()
                .await
                .map_err(|e| FallbackError::SearchFailed {
                    reason: format!("malformed search response: {e}"),
                })?;

        let hits: Vec<WebHit> = parsed
            .results
            .into_iter()
            .take(limit)
            .map(|row| WebHit {
                title: row.title,
                url: row.url,
                snippet: row.content,
            })
            .collect();
        debug!(count = hits.len(), "web search completed");
        Ok(hits)
    }
}
