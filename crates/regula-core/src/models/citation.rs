use serde::{Deserialize, Serialize};

use crate::passage::{PassageLocation, RegulationTag};

/// A numbered reference to a passage supplied to the generator.
///
/// Ids are 1-based prompt positions. The list for one response is dense and
/// gapless, so an in-text marker `[n]` always resolves to citation `n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    /// 1-based position of the passage block in the prompt.
    pub id: u32,
    /// Stable id of the cited passage.
    pub passage_id: String,
    /// Source document name.
    pub source_doc: String,
    /// Regulation the passage belongs to.
    pub regulation: RegulationTag,
    /// Section/page location.
    pub location: PassageLocation,
    /// The exact span quoted into the prompt, post-truncation.
    pub snippet: String,
}

impl Citation {
    /// Render a reference line: `[1] GDPR - gdpr_2016.pdf, Page(s) 33, 34`.
    pub fn format_reference(&self) -> String {
        format!(
            "[{}] {} - {}, Page(s) {}",
            self.id,
            self.regulation.as_str(),
            self.source_doc,
            self.location.pages_label()
        )
    }
}
