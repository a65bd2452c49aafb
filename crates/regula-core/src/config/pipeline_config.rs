use serde::{Deserialize, Serialize};

use super::defaults;

/// Pipeline orchestration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Outer deadline across the whole answer path (milliseconds);
    /// expiry becomes a timeout refusal. `None` disables the ceiling.
    pub deadline_ms: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            deadline_ms: Some(defaults::DEFAULT_DEADLINE_MS),
        }
    }
}
