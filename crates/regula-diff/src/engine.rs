//! Change detection between two versions of one regulation's passage set.
//!
//! Four-step pipeline: exact fingerprint matching excludes the unchanged,
//! section-scoped pairwise similarity proposes candidates, a greedy pass
//! over a totally ordered candidate list assigns Modified pairs, and the
//! leftovers become Removed and Added. No timestamps and no generated ids
//! anywhere in the report, so identical inputs produce identical bytes.

use std::collections::{BTreeMap, HashMap, VecDeque};

use rayon::prelude::*;
use regula_core::config::DiffConfig;
use regula_core::errors::{DiffError, RegulaResult};
use regula_core::models::{ChangeEntry, ChangeKind, ChangeReport};
use regula_core::passage::{Passage, RegulationTag};
use tracing::{debug, info};

use crate::similarity::similarity;

/// A proposed old/new pairing, scored but not yet assigned.
struct PairCandidate {
    similarity: f64,
    old_pos: usize,
    new_pos: usize,
}

/// Computes passage-granularity change reports.
pub struct DiffEngine {
    config: DiffConfig,
}

impl DiffEngine {
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    /// Diff two ordered passage sets of the same regulation.
    ///
    /// The expected tag comes from the first old passage (first new passage
    /// when the old side is empty); any passage carrying a different tag is
    /// a caller error, rejected before any comparison work. Two empty
    /// inputs succeed with an empty report.
    pub fn diff(&self, old: &[Passage], new: &[Passage]) -> RegulaResult<ChangeReport> {
        let regulation = old
            .first()
            .or_else(|| new.first())
            .map(|p| p.regulation.clone())
            .unwrap_or(RegulationTag::Other(String::new()));
        verify_same_regulation(old, new, &regulation)?;

        // Step 1: exact fingerprint matches are unchanged. Multiset
        // semantics: each old occurrence consumes the earliest unconsumed
        // new occurrence.
        let mut by_fingerprint: HashMap<&str, VecDeque<usize>> = HashMap::new();
        for (j, passage) in new.iter().enumerate() {
            by_fingerprint
                .entry(passage.fingerprint.as_str())
                .or_default()
                .push_back(j);
        }

        let mut new_matched = vec![false; new.len()];
        let mut old_remaining: Vec<usize> = Vec::new();
        let mut unchanged = 0usize;
        for (i, passage) in old.iter().enumerate() {
            match by_fingerprint
                .get_mut(passage.fingerprint.as_str())
                .and_then(VecDeque::pop_front)
            {
                Some(j) => {
                    new_matched[j] = true;
                    unchanged += 1;
                }
                None => old_remaining.push(i),
            }
        }
        let new_remaining: Vec<usize> = (0..new.len()).filter(|&j| !new_matched[j]).collect();

        // Step 2: pairwise similarity, bounded by section anchors. Passages
        // without an anchor form their own group. Groups are independent,
        // so they score in parallel.
        let mut groups: BTreeMap<Option<&str>, (Vec<usize>, Vec<usize>)> = BTreeMap::new();
        for &i in &old_remaining {
            groups
                .entry(old[i].location.section.as_deref())
                .or_default()
                .0
                .push(i);
        }
        for &j in &new_remaining {
            groups
                .entry(new[j].location.section.as_deref())
                .or_default()
                .1
                .push(j);
        }
        let groups: Vec<(Vec<usize>, Vec<usize>)> = groups
            .into_values()
            .filter(|(olds, news)| !olds.is_empty() && !news.is_empty())
            .collect();
        debug!(
            groups = groups.len(),
            old_remaining = old_remaining.len(),
            new_remaining = new_remaining.len(),
            "scoring candidate pairs"
        );

        let mut candidates: Vec<PairCandidate> = groups
            .par_iter()
            .flat_map_iter(|(olds, news)| score_group(olds, news, old, new))
            .collect();

        // Step 3: greedy assignment over a total order, so equal scores can
        // never reorder between runs.
        candidates.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.old_pos.cmp(&b.old_pos))
                .then_with(|| a.new_pos.cmp(&b.new_pos))
        });

        let mut old_assigned = vec![false; old.len()];
        let mut new_assigned = vec![false; new.len()];
        let mut modified: Vec<(usize, usize, f64)> = Vec::new();
        for pair in &candidates {
            if pair.similarity < self.config.similarity_threshold {
                break;
            }
            if old_assigned[pair.old_pos] || new_assigned[pair.new_pos] {
                continue;
            }
            old_assigned[pair.old_pos] = true;
            new_assigned[pair.new_pos] = true;
            modified.push((pair.old_pos, pair.new_pos, pair.similarity));
        }

        // Step 4: leftovers, then the report in its fixed order.
        modified.sort_by_key(|&(old_pos, _, _)| old_pos);
        let mut entries: Vec<ChangeEntry> = modified
            .iter()
            .map(|&(old_pos, new_pos, sim)| ChangeEntry {
                kind: ChangeKind::Modified,
                old: Some(old[old_pos].clone()),
                new: Some(new[new_pos].clone()),
                similarity: sim,
            })
            .collect();
        entries.extend(
            old_remaining
                .iter()
                .filter(|&&i| !old_assigned[i])
                .map(|&i| ChangeEntry {
                    kind: ChangeKind::Removed,
                    old: Some(old[i].clone()),
                    new: None,
                    similarity: 0.0,
                }),
        );
        entries.extend(
            new_remaining
                .iter()
                .filter(|&&j| !new_assigned[j])
                .map(|&j| ChangeEntry {
                    kind: ChangeKind::Added,
                    old: None,
                    new: Some(new[j].clone()),
                    similarity: 0.0,
                }),
        );

        let report = ChangeReport {
            regulation,
            old_total: old.len(),
            new_total: new.len(),
            unchanged,
            entries,
        };
        let summary = report.summary();
        info!(
            regulation = %report.regulation,
            old_total = report.old_total,
            new_total = report.new_total,
            unchanged = summary.unchanged,
            modified = summary.modified,
            removed = summary.removed,
            added = summary.added,
            "change detection complete"
        );
        Ok(report)
    }
}

/// Score every old/new pair inside one section group.
fn score_group(
    olds: &[usize],
    news: &[usize],
    old: &[Passage],
    new: &[Passage],
) -> Vec<PairCandidate> {
    let mut pairs = Vec::with_capacity(olds.len() * news.len());
    for &i in olds {
        for &j in news {
            pairs.push(PairCandidate {
                similarity: similarity(&old[i].text, &new[j].text),
                old_pos: i,
                new_pos: j,
            });
        }
    }
    pairs
}

fn verify_same_regulation(
    old: &[Passage],
    new: &[Passage],
    expected: &RegulationTag,
) -> Result<(), DiffError> {
    for passage in old.iter().chain(new.iter()) {
        if &passage.regulation != expected {
            return Err(DiffError::RegulationMismatch {
                expected: expected.as_str().to_string(),
                found: passage.regulation.as_str().to_string(),
                passage_id: passage.id.clone(),
            });
        }
    }
    Ok(())
}
