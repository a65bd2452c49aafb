//! Min-max score fusion across keyword and semantic result lists.
//!
//! Raw scores from the two methods live on different scales (keyword scores
//! are unbounded, semantic similarity is cosine-like), so each (variant,
//! method) result list is normalized to [0, 1] before the alpha blend.

use std::collections::HashMap;

use regula_core::models::{FusedResult, ScoredCandidate};
use regula_core::passage::Passage;

/// Keyword and semantic result lists for one query variant.
#[derive(Debug, Default)]
pub struct VariantResults {
    pub keyword: Vec<ScoredCandidate>,
    pub semantic: Vec<ScoredCandidate>,
    /// Variant weight: 1.0 for the original query, lower for expansions.
    pub weight: f64,
}

/// Per-passage evidence collected within a single variant.
struct Evidence<'a> {
    passage: &'a Passage,
    keyword: f64,
    semantic: f64,
    keyword_rank: Option<usize>,
}

/// Min-max normalize one result list's scores to [0, 1].
///
/// A degenerate list (single result, or zero score variance) normalizes to
/// 1.0: the method returned it, so it counts as full-strength evidence.
fn normalized_scores(candidates: &[ScoredCandidate]) -> Vec<f64> {
    if candidates.is_empty() {
        return Vec::new();
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for candidate in candidates {
        min = min.min(candidate.score);
        max = max.max(candidate.score);
    }
    let range = max - min;
    if range <= f64::EPSILON {
        return vec![1.0; candidates.len()];
    }
    candidates
        .iter()
        .map(|candidate| (candidate.score - min) / range)
        .collect()
}

/// Fuse per-variant result lists into one deduplicated ranking.
///
/// Per passage within a variant:
/// `fused = ((1 - alpha) * keyword + alpha * semantic) * variant_weight`,
/// where a method that did not return the passage contributes 0. Across
/// variants each passage keeps its maximum fused score and best keyword
/// rank. Ordering: fused score descending, keyword rank ascending
/// (semantic-only results last), passage id ascending. Truncated to `top_k`.
pub fn fuse(variant_results: &[VariantResults], alpha: f64, top_k: usize) -> Vec<FusedResult> {
    let mut best: HashMap<String, FusedResult> = HashMap::new();

    for results in variant_results {
        let keyword_norm = normalized_scores(&results.keyword);
        let semantic_norm = normalized_scores(&results.semantic);

        let mut evidence: HashMap<&str, Evidence<'_>> = HashMap::new();
        for (rank, (candidate, norm)) in results.keyword.iter().zip(&keyword_norm).enumerate() {
            evidence
                .entry(candidate.passage.id.as_str())
                .and_modify(|e| {
                    if *norm > e.keyword {
                        e.keyword = *norm;
                    }
                })
                .or_insert(Evidence {
                    passage: &candidate.passage,
                    keyword: *norm,
                    semantic: 0.0,
                    keyword_rank: Some(rank),
                });
        }
        for (candidate, norm) in results.semantic.iter().zip(&semantic_norm) {
            evidence
                .entry(candidate.passage.id.as_str())
                .and_modify(|e| {
                    if *norm > e.semantic {
                        e.semantic = *norm;
                    }
                })
                .or_insert(Evidence {
                    passage: &candidate.passage,
                    keyword: 0.0,
                    semantic: *norm,
                    keyword_rank: None,
                });
        }

        for entry in evidence.into_values() {
            let fused = (((1.0 - alpha) * entry.keyword + alpha * entry.semantic)
                * results.weight)
                .clamp(0.0, 1.0);
            match best.get_mut(entry.passage.id.as_str()) {
                Some(existing) => {
                    if fused > existing.fused_score {
                        existing.fused_score = fused;
                    }
                    existing.keyword_rank = min_rank(existing.keyword_rank, entry.keyword_rank);
                }
                None => {
                    best.insert(
                        entry.passage.id.clone(),
                        FusedResult {
                            passage: entry.passage.clone(),
                            fused_score: fused,
                            keyword_rank: entry.keyword_rank,
                        },
                    );
                }
            }
        }
    }

    let mut fused: Vec<FusedResult> = best.into_values().collect();
    fused.sort_by(|a, b| {
        b.fused_score
            .partial_cmp(&a.fused_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| sort_rank(a.keyword_rank).cmp(&sort_rank(b.keyword_rank)))
            .then_with(|| a.passage.id.cmp(&b.passage.id))
    });
    fused.truncate(top_k);
    fused
}

/// Best (lowest) keyword rank seen so far.
fn min_rank(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (x, None) => x,
        (None, y) => y,
    }
}

/// Semantic-only results (no keyword rank) sort after any ranked result.
fn sort_rank(rank: Option<usize>) -> usize {
    rank.unwrap_or(usize::MAX)
}
