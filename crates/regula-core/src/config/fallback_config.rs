use serde::{Deserialize, Serialize};

use super::defaults;

/// Fallback resolver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Hard timeout for the single web-search attempt (milliseconds). On
    /// expiry the in-flight call is cancelled and the curated tier used.
    pub web_timeout_ms: u64,
    /// Maximum external sources surfaced to the user.
    pub max_sources: usize,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            web_timeout_ms: defaults::DEFAULT_WEB_TIMEOUT_MS,
            max_sources: defaults::DEFAULT_MAX_FALLBACK_SOURCES,
        }
    }
}
