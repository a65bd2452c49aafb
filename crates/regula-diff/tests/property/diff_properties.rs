use std::collections::HashSet;

use proptest::prelude::*;
use regula_core::config::DiffConfig;
use regula_core::models::ChangeKind;
use regula_core::passage::{Passage, PassageLocation, RegulationTag};
use regula_diff::DiffEngine;

const TEXTS: &[&str] = &[
    "personal data shall be erased within 30 days of a valid request",
    "personal data shall be erased within 15 days of a valid request",
    "the controller shall notify the supervisory authority within 72 hours",
    "the controller shall notify the supervisory authority without undue delay",
    "processing is lawful only with the consent of the data subject",
    "records of processing activities shall be maintained by the controller",
    "appropriate technical and organisational measures shall be implemented",
    "transfers to a third country require an adequacy decision",
];

const SECTIONS: &[Option<&str>] = &[
    None,
    Some("Article 17"),
    Some("Article 33"),
    Some("Article 6"),
];

fn make_passage(prefix: &str, idx: usize, text_id: usize, section_id: usize) -> Passage {
    Passage::new(
        format!("{prefix}-{idx:02}"),
        "gdpr_2016.pdf".to_string(),
        RegulationTag::Gdpr,
        PassageLocation {
            section: SECTIONS[section_id].map(String::from),
            pages: vec![idx as u32 + 1],
        },
        TEXTS[text_id].to_string(),
    )
}

fn arb_side(prefix: &'static str) -> impl Strategy<Value = Vec<Passage>> {
    prop::collection::vec((0usize..TEXTS.len(), 0usize..SECTIONS.len()), 0..10).prop_map(
        move |items| {
            items
                .into_iter()
                .enumerate()
                .map(|(i, (text_id, section_id))| make_passage(prefix, i, text_id, section_id))
                .collect()
        },
    )
}

fn kind_rank(kind: ChangeKind) -> u8 {
    match kind {
        ChangeKind::Modified => 0,
        ChangeKind::Removed => 1,
        ChangeKind::Added => 2,
    }
}

// ── Every passage lands in exactly one category ──────────────────────────

proptest! {
    #[test]
    fn every_passage_is_accounted_exactly_once(
        old in arb_side("old"),
        new in arb_side("new")
    ) {
        let report = DiffEngine::new(DiffConfig::default())
            .diff(&old, &new)
            .unwrap();
        let summary = report.summary();

        prop_assert_eq!(report.old_total, old.len());
        prop_assert_eq!(report.new_total, new.len());
        prop_assert_eq!(
            summary.unchanged + summary.modified + summary.removed,
            old.len()
        );
        prop_assert_eq!(
            summary.unchanged + summary.modified + summary.added,
            new.len()
        );

        let old_ids: Vec<&str> = report
            .entries
            .iter()
            .filter_map(|e| e.old.as_ref())
            .map(|p| p.id.as_str())
            .collect();
        let unique_old: HashSet<&str> = old_ids.iter().copied().collect();
        prop_assert_eq!(unique_old.len(), old_ids.len(), "old passage in two entries");

        let new_ids: Vec<&str> = report
            .entries
            .iter()
            .filter_map(|e| e.new.as_ref())
            .map(|p| p.id.as_str())
            .collect();
        let unique_new: HashSet<&str> = new_ids.iter().copied().collect();
        prop_assert_eq!(unique_new.len(), new_ids.len(), "new passage in two entries");
    }
}

// ── Reports are byte-for-byte reproducible ───────────────────────────────

proptest! {
    #[test]
    fn reports_are_byte_reproducible(
        old in arb_side("old"),
        new in arb_side("new")
    ) {
        let engine = DiffEngine::new(DiffConfig::default());
        let first = engine.diff(&old, &new).unwrap();
        let second = engine.diff(&old, &new).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

// ── Entry order, similarity bounds, and section scoping hold ─────────────

proptest! {
    #[test]
    fn entries_follow_the_fixed_order_and_bounds(
        old in arb_side("old"),
        new in arb_side("new")
    ) {
        let threshold = DiffConfig::default().similarity_threshold;
        let report = DiffEngine::new(DiffConfig::default())
            .diff(&old, &new)
            .unwrap();

        for pair in report.entries.windows(2) {
            prop_assert!(
                kind_rank(pair[0].kind) <= kind_rank(pair[1].kind),
                "entries out of kind order"
            );
        }

        for entry in &report.entries {
            match entry.kind {
                ChangeKind::Modified => {
                    let old_p = entry.old.as_ref().unwrap();
                    let new_p = entry.new.as_ref().unwrap();
                    prop_assert!(entry.similarity >= threshold);
                    prop_assert!(entry.similarity <= 1.0);
                    prop_assert_eq!(&old_p.location.section, &new_p.location.section);
                }
                ChangeKind::Removed => {
                    prop_assert!(entry.old.is_some() && entry.new.is_none());
                    prop_assert_eq!(entry.similarity, 0.0);
                }
                ChangeKind::Added => {
                    prop_assert!(entry.old.is_none() && entry.new.is_some());
                    prop_assert_eq!(entry.similarity, 0.0);
                }
            }
        }
    }
}
