use serde::{Deserialize, Serialize};

use crate::passage::Passage;

/// A passage after score fusion, ready for the assembler.
///
/// Fused lists hold no duplicate passage ids and are ordered by fused score
/// descending, ties broken by best keyword rank ascending (keyword evidence
/// is trusted more for legal text), then by passage id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusedResult {
    pub passage: Passage,
    /// Keyword/semantic blend scaled by the variant weight, in [0, 1].
    pub fused_score: f64,
    /// Best 0-based keyword rank across variants; `None` when keyword
    /// search never returned this passage.
    pub keyword_rank: Option<usize>,
}
