//! Configuration: one struct per subsystem, aggregated by [`RegulaConfig`].
//!
//! Every field carries a serde default, so partial TOML files work and an
//! absent file is equivalent to `RegulaConfig::default()`.

pub mod defaults;

pub mod diff_config;
pub mod expansion_config;
pub mod fallback_config;
pub mod grounding_config;
pub mod pipeline_config;
pub mod retrieval_config;

pub use diff_config::DiffConfig;
pub use expansion_config::{ExpansionConfig, SynonymEntry};
pub use fallback_config::FallbackConfig;
pub use grounding_config::GroundingConfig;
pub use pipeline_config::PipelineConfig;
pub use retrieval_config::RetrievalConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration for the whole pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegulaConfig {
    pub expansion: ExpansionConfig,
    pub retrieval: RetrievalConfig,
    pub grounding: GroundingConfig,
    pub fallback: FallbackConfig,
    pub diff: DiffConfig,
    pub pipeline: PipelineConfig,
}

impl RegulaConfig {
    /// Load from a TOML file. Missing keys fall back to defaults.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Check tunables, returning human-readable issues. Empty means valid.
    ///
    /// Reports rather than fails: callers decide whether an issue is fatal.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if !(0.0..=1.0).contains(&self.retrieval.alpha) {
            issues.push(format!(
                "retrieval.alpha must be in [0, 1], got {}",
                self.retrieval.alpha
            ));
        }
        if self.retrieval.top_k == 0 {
            issues.push("retrieval.top_k must be positive".to_string());
        }
        if self.retrieval.over_fetch_factor == 0 {
            issues.push("retrieval.over_fetch_factor must be positive".to_string());
        }
        if self.expansion.max_variants == 0 {
            issues.push("expansion.max_variants must be positive".to_string());
        }
        if self.expansion.expansion_weight <= 0.0 || self.expansion.expansion_weight > 1.0 {
            issues.push(format!(
                "expansion.expansion_weight must be in (0, 1], got {}",
                self.expansion.expansion_weight
            ));
        }
        if self.diff.similarity_threshold <= 0.0 || self.diff.similarity_threshold > 1.0 {
            issues.push(format!(
                "diff.similarity_threshold must be in (0, 1], got {}",
                self.diff.similarity_threshold
            ));
        }
        if self.fallback.web_timeout_ms == 0 {
            issues.push("fallback.web_timeout_ms must be positive".to_string());
        }
        if self.grounding.passage_char_budget == 0 {
            issues.push("grounding.passage_char_budget must be positive".to_string());
        }
        if self.grounding.max_tokens == 0 {
            issues.push("grounding.max_tokens must be positive".to_string());
        }
        issues
    }
}
