use serde::{Deserialize, Serialize};

use super::defaults;

/// Grounding assembler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundingConfig {
    /// Per-passage character budget inside the prompt; longer passage text
    /// is truncated at a char boundary before quoting.
    pub passage_char_budget: usize,
    /// Generation sampling temperature.
    pub temperature: f64,
    /// Generation token ceiling.
    pub max_tokens: u32,
}

impl Default for GroundingConfig {
    fn default() -> Self {
        Self {
            passage_char_budget: defaults::DEFAULT_PASSAGE_CHAR_BUDGET,
            temperature: defaults::DEFAULT_TEMPERATURE,
            max_tokens: defaults::DEFAULT_MAX_TOKENS,
        }
    }
}
