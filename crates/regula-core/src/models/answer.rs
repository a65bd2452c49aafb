use serde::{Deserialize, Serialize};

use super::citation::Citation;

/// Final output of the grounding assembler.
///
/// `Answered` always carries at least one citation; `Refused` never carries
/// any. Serialized as a tagged enum so downstream consumers can branch on
/// `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnswerResult {
    Answered {
        /// Generated answer with its bracketed citation markers intact.
        text: String,
        /// One citation per prompt passage, ids 1..=n in rank order.
        citations: Vec<Citation>,
    },
    Refused {
        /// User-visible refusal reason, one of a small closed set.
        reason: String,
    },
}

impl AnswerResult {
    pub fn is_refused(&self) -> bool {
        matches!(self, Self::Refused { .. })
    }

    /// Answer text followed by a `Sources:` block of reference lines.
    /// A refusal renders as its reason.
    pub fn format_full_response(&self) -> String {
        match self {
            Self::Answered { text, citations } => {
                let mut out = text.clone();
                out.push_str("\n\nSources:\n");
                for citation in citations {
                    out.push_str(&citation.format_reference());
                    out.push('\n');
                }
                out
            }
            Self::Refused { reason } => reason.clone(),
        }
    }
}
