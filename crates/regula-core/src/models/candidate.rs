use serde::{Deserialize, Serialize};

use crate::passage::Passage;

/// A (passage, score) pair from a single search method.
///
/// Scores are method-local and not comparable across methods until fusion
/// normalizes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub passage: Passage,
    /// Raw method-local relevance score.
    pub score: f64,
}
