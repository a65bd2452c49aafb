use proptest::prelude::*;
use regula_core::errors::GroundingError;
use regula_core::models::FusedResult;
use regula_core::passage::{Passage, PassageLocation, RegulationTag};
use regula_grounding::citations::{citation_list, validate_markers};

fn make_results(n: usize) -> Vec<FusedResult> {
    (0..n)
        .map(|i| FusedResult {
            passage: Passage::new(
                format!("p{:02}", i),
                "gdpr_2016.pdf".to_string(),
                RegulationTag::Gdpr,
                PassageLocation::default(),
                "data protection obligation ".repeat(i + 1),
            ),
            fused_score: 1.0 - i as f64 * 0.05,
            keyword_rank: Some(i),
        })
        .collect()
}

fn cited_response(markers: &[usize]) -> String {
    markers
        .iter()
        .map(|k| format!("The controller must act [{k}]."))
        .collect::<Vec<_>>()
        .join(" ")
}

fn arb_in_range_markers() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (1usize..20).prop_flat_map(|n| (Just(n), prop::collection::vec(1..=n, 1..8)))
}

// ── In-range markers validate in appearance order ────────────────────────

proptest! {
    #[test]
    fn in_range_markers_always_validate(
        (n, markers) in arb_in_range_markers()
    ) {
        let response = cited_response(&markers);
        let validated = validate_markers(&response, n).unwrap();
        let expected: Vec<u32> = markers.iter().map(|&k| k as u32).collect();
        prop_assert_eq!(validated, expected);
    }
}

// ── Any out-of-range or zero-padded marker fails the whole response ──────

proptest! {
    #[test]
    fn out_of_range_marker_always_fails(
        n in 1usize..20,
        excess in 1usize..500
    ) {
        let k = n + excess;
        let response = format!("Valid point [1]. Invalid point [{k}].");
        let err = validate_markers(&response, n).unwrap_err();
        match err {
            GroundingError::CitationIntegrity { marker, passage_count } => {
                prop_assert_eq!(marker, k.to_string());
                prop_assert_eq!(passage_count, n);
            }
            other => prop_assert!(false, "expected CitationIntegrity, got {:?}", other),
        }
    }

    #[test]
    fn leading_zero_markers_always_fail(
        (n, markers) in arb_in_range_markers()
    ) {
        let k = markers[0];
        let response = format!("see [0{k}]");
        let err = validate_markers(&response, n).unwrap_err();
        prop_assert!(
            matches!(err, GroundingError::CitationIntegrity { .. }),
            "leading zero accepted for [0{}] against {} passages",
            k,
            n
        );
    }

    #[test]
    fn no_marker_is_valid_against_zero_passages(
        k in 1usize..500
    ) {
        let response = format!("see [{k}]");
        let err = validate_markers(&response, 0).unwrap_err();
        prop_assert!(matches!(err, GroundingError::CitationIntegrity { .. }));
    }
}

// ── Bracket-free prose is uncited ────────────────────────────────────────

proptest! {
    #[test]
    fn bracket_free_text_is_uncited(
        text in "[^\\[]{0,200}",
        n in 1usize..10
    ) {
        let err = validate_markers(&text, n).unwrap_err();
        prop_assert!(matches!(err, GroundingError::UncitedResponse));
    }
}

// ── Validation never panics and accepted markers stay in range ───────────

proptest! {
    #[test]
    fn accepted_markers_are_always_in_range(
        text in ".{0,200}",
        n in 0usize..20
    ) {
        if let Ok(markers) = validate_markers(&text, n) {
            prop_assert!(!markers.is_empty());
            for marker in markers {
                prop_assert!(
                    marker >= 1 && marker as usize <= n,
                    "accepted marker {} against {} passages",
                    marker,
                    n
                );
            }
        }
    }
}

// ── Citation lists are dense over the prompt passages ────────────────────

proptest! {
    #[test]
    fn citation_list_is_dense(
        n in 0usize..12,
        budget in 1usize..600
    ) {
        let results = make_results(n);
        let citations = citation_list(&results, budget);

        prop_assert_eq!(citations.len(), n);
        for (i, citation) in citations.iter().enumerate() {
            prop_assert_eq!(citation.id, (i + 1) as u32);
            prop_assert_eq!(&citation.passage_id, &results[i].passage.id);
            prop_assert!(
                citation.snippet.chars().count() <= budget,
                "snippet exceeds budget: {} > {}",
                citation.snippet.chars().count(),
                budget
            );
        }
    }
}
