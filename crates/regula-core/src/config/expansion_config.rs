use serde::{Deserialize, Serialize};

use super::defaults;

/// One synonym-table entry: a trigger term and its expansion phrases.
///
/// Entry order matters: it is the deterministic tie-break when the variant
/// cap cuts expansions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynonymEntry {
    /// Term matched case-insensitively as a whole word in the query.
    pub term: String,
    /// Phrases appended to the query, one variant each.
    pub expansions: Vec<String>,
}

/// Query expansion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Cap on total variants, the original included.
    pub max_variants: usize,
    /// Weight assigned to expansion-derived variants, in (0, 1].
    pub expansion_weight: f64,
    /// Emit one variant appending the regulation's display name when a
    /// filter is set and the query does not already mention it.
    pub append_regulation_name: bool,
    /// Synonym table override. Empty means the built-in compliance table.
    pub synonyms: Vec<SynonymEntry>,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_variants: defaults::DEFAULT_MAX_VARIANTS,
            expansion_weight: defaults::DEFAULT_EXPANSION_WEIGHT,
            append_regulation_name: true,
            synonyms: Vec::new(),
        }
    }
}
