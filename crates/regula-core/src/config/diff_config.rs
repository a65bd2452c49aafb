use serde::{Deserialize, Serialize};

use super::defaults;

/// Change detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Similarity in (0, 1] at or above which an old/new passage pair is
    /// reported as Modified rather than Removed + Added.
    pub similarity_threshold: f64,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}
