use serde::{Deserialize, Serialize};

use crate::passage::{Passage, RegulationTag};

/// Kind of passage-level change between two corpus versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

/// One passage-level difference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEntry {
    pub kind: ChangeKind,
    /// Old-version passage; `None` for Added.
    pub old: Option<Passage>,
    /// New-version passage; `None` for Removed.
    pub new: Option<Passage>,
    /// Pairing similarity for Modified; 0.0 for Added/Removed.
    pub similarity: f64,
}

/// Per-kind entry counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub unchanged: usize,
}

/// Passage-granularity diff of two versions of one regulation.
///
/// Unchanged passages (identical fingerprints) are counted but excluded
/// from the entries. Byte-for-byte reproducible for identical inputs: no
/// timestamps, no generated ids. Computed per comparison request; persisting
/// it is an external concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeReport {
    pub regulation: RegulationTag,
    pub old_total: usize,
    pub new_total: usize,
    /// Passages excluded by exact fingerprint match.
    pub unchanged: usize,
    /// Modified (old-position order), then Removed (old-position order),
    /// then Added (new-position order).
    pub entries: Vec<ChangeEntry>,
}

impl ChangeReport {
    pub fn summary(&self) -> ChangeSummary {
        let mut summary = ChangeSummary {
            added: 0,
            removed: 0,
            modified: 0,
            unchanged: self.unchanged,
        };
        for entry in &self.entries {
            match entry.kind {
                ChangeKind::Added => summary.added += 1,
                ChangeKind::Removed => summary.removed += 1,
                ChangeKind::Modified => summary.modified += 1,
            }
        }
        summary
    }

    /// Whole-corpus similarity in [0, 1]: unchanged passages count 1.0,
    /// modified pairs their pairing similarity, added/removed 0.0.
    pub fn corpus_similarity(&self) -> f64 {
        let summary = self.summary();
        let total = summary.unchanged + summary.modified + summary.added + summary.removed;
        if total == 0 {
            return 1.0;
        }
        let modified_mass: f64 = self
            .entries
            .iter()
            .filter(|e| e.kind == ChangeKind::Modified)
            .map(|e| e.similarity)
            .sum();
        (summary.unchanged as f64 + modified_mass) / total as f64
    }
}
