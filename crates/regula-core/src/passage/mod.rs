pub mod fingerprint;
pub mod regulation;

pub use regulation::RegulationTag;

use serde::{Deserialize, Serialize};

/// Where a passage sits inside its source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassageLocation {
    /// Section anchor (e.g. "Article 33") when the ingestion pipeline found
    /// one. Bounds the change detector's pairwise comparison.
    pub section: Option<String>,
    /// Page numbers the passage spans.
    pub pages: Vec<u32>,
}

impl PassageLocation {
    /// Render pages for citation lines: "33, 34", or "-" when unknown.
    pub fn pages_label(&self) -> String {
        if self.pages.is_empty() {
            return "-".to_string();
        }
        self.pages
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Immutable unit of retrievable regulation text.
///
/// Created by the ingestion pipeline with a stable id; never mutated here;
/// retired only by re-ingestion of a new document version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passage {
    /// Stable identifier assigned at ingestion.
    pub id: String,
    /// Source document name (e.g. "gdpr_2016.pdf").
    pub source_doc: String,
    /// Regulation this passage belongs to.
    pub regulation: RegulationTag,
    /// Section/page location within the source document.
    pub location: PassageLocation,
    /// Raw passage text.
    pub text: String,
    /// blake3 hex digest of the normalized text.
    pub fingerprint: String,
    /// Embedding vector, opaque to this core; passed through when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl Passage {
    /// Build a passage, computing its fingerprint from the text.
    pub fn new(
        id: String,
        source_doc: String,
        regulation: RegulationTag,
        location: PassageLocation,
        text: String,
    ) -> Self {
        let fingerprint = fingerprint::fingerprint(&text);
        Self {
            id,
            source_doc,
            regulation,
            location,
            text,
            fingerprint,
            embedding: None,
        }
    }

    /// Content comparison via fingerprints, distinct from identity equality.
    pub fn content_eq(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint
    }
}

/// Identity equality: two passages are equal if they share an id.
///
/// For content comparison use [`Passage::content_eq`] instead.
impl PartialEq for Passage {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Passage {}
