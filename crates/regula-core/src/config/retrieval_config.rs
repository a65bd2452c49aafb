use serde::{Deserialize, Serialize};

use super::defaults;

/// Hybrid retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Semantic share of the fused score, in [0, 1]; the remainder comes
    /// from keyword relevance. The 0.3 default favors exact term and
    /// article matches, which legal text rewards over paraphrase.
    pub alpha: f64,
    /// Fused results returned to the assembler.
    pub top_k: usize,
    /// Per-method over-fetch multiplier (search limit = top_k * factor),
    /// giving fusion enough material.
    pub over_fetch_factor: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            alpha: defaults::DEFAULT_FUSION_ALPHA,
            top_k: defaults::DEFAULT_TOP_K,
            over_fetch_factor: defaults::DEFAULT_OVER_FETCH_FACTOR,
        }
    }
}
