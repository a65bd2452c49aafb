use proptest::prelude::*;
use regula_core::models::ScoredCandidate;
use regula_core::passage::{Passage, PassageLocation, RegulationTag};
use regula_retrieval::search::fusion::{fuse, VariantResults};
use std::collections::HashSet;

fn candidate(id: usize, score: f64) -> ScoredCandidate {
    ScoredCandidate {
        passage: Passage::new(
            format!("p{:02}", id),
            "gdpr_2016.pdf".to_string(),
            RegulationTag::Gdpr,
            PassageLocation::default(),
            format!("passage {}", id),
        ),
        score,
    }
}

fn arb_candidates() -> impl Strategy<Value = Vec<ScoredCandidate>> {
    prop::collection::vec((0usize..8, 0.0f64..100.0), 0..10)
        .prop_map(|items| items.into_iter().map(|(id, s)| candidate(id, s)).collect())
}

fn arb_variant_results() -> impl Strategy<Value = Vec<VariantResults>> {
    prop::collection::vec(
        (arb_candidates(), arb_candidates(), 0.0f64..=1.0).prop_map(
            |(keyword, semantic, weight)| VariantResults {
                keyword,
                semantic,
                weight,
            },
        ),
        0..5,
    )
}

fn fingerprint_output(results: &[regula_core::models::FusedResult]) -> Vec<(String, u64, Option<usize>)> {
    results
        .iter()
        .map(|r| (r.passage.id.clone(), r.fused_score.to_bits(), r.keyword_rank))
        .collect()
}

// ── Fusion is deterministic for identical inputs ─────────────────────────

proptest! {
    #[test]
    fn fusion_is_deterministic(
        inputs in arb_variant_results(),
        alpha in 0.0f64..=1.0,
        top_k in 1usize..10
    ) {
        let first = fuse(&inputs, alpha, top_k);
        let second = fuse(&inputs, alpha, top_k);
        prop_assert_eq!(fingerprint_output(&first), fingerprint_output(&second));
    }
}

// ── Output holds no duplicate passages and only input passages ───────────

proptest! {
    #[test]
    fn output_is_deduplicated(
        inputs in arb_variant_results(),
        alpha in 0.0f64..=1.0,
        top_k in 1usize..10
    ) {
        let results = fuse(&inputs, alpha, top_k);

        let ids: Vec<&str> = results.iter().map(|r| r.passage.id.as_str()).collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), ids.len(), "duplicate id in output");

        let input_ids: HashSet<&str> = inputs
            .iter()
            .flat_map(|v| v.keyword.iter().chain(v.semantic.iter()))
            .map(|c| c.passage.id.as_str())
            .collect();
        for id in ids {
            prop_assert!(input_ids.contains(id), "fabricated id: {}", id);
        }
    }
}

// ── Scores stay in [0, 1] and the list is sorted and bounded ─────────────

proptest! {
    #[test]
    fn scores_bounded_and_sorted(
        inputs in arb_variant_results(),
        alpha in 0.0f64..=1.0,
        top_k in 1usize..10
    ) {
        let results = fuse(&inputs, alpha, top_k);
        prop_assert!(results.len() <= top_k);

        for r in &results {
            prop_assert!(
                (0.0..=1.0).contains(&r.fused_score),
                "score out of range: {}",
                r.fused_score
            );
        }
        for pair in results.windows(2) {
            prop_assert!(
                pair[0].fused_score >= pair[1].fused_score,
                "not sorted: {} < {}",
                pair[0].fused_score,
                pair[1].fused_score
            );
        }
    }
}
