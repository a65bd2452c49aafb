//! Compliance-aware synonym table.
//!
//! Maps colloquial query terms to the formal vocabulary regulations use.
//! E.g., "breach" → "notification supervisory authority 72 hours Article 33".

use regula_core::config::{ExpansionConfig, SynonymEntry};

/// Ordered synonym table.
///
/// Entry order is the deterministic tie-break when the variant cap cuts
/// expansions short, so entries are kept as a Vec rather than a map.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    entries: Vec<SynonymEntry>,
}

impl SynonymTable {
    pub fn new(entries: Vec<SynonymEntry>) -> Self {
        Self { entries }
    }

    /// Table from config: explicit entries when provided, built-ins otherwise.
    pub fn from_config(config: &ExpansionConfig) -> Self {
        if config.synonyms.is_empty() {
            Self::compliance_defaults()
        } else {
            Self::new(config.synonyms.clone())
        }
    }

    /// Built-in table covering the recurring vocabulary of privacy and
    /// security regulation. Terms are matched whole-word, case-insensitive.
    pub fn compliance_defaults() -> Self {
        fn entry(term: &str, expansions: &[&str]) -> SynonymEntry {
            SynonymEntry {
                term: term.to_string(),
                expansions: expansions.iter().map(|e| e.to_string()).collect(),
            }
        }

        Self::new(vec![
            entry(
                "breach",
                &[
                    "unauthorized access security incident",
                    "notification supervisory authority 72 hours Article 33",
                ],
            ),
            entry(
                "notification",
                &[
                    "notify the supervisory authority",
                    "Article 33 personal data breach",
                ],
            ),
            entry("erasure", &["right to be forgotten", "Article 17 deletion"]),
            entry("deletion", &["erasure right to be forgotten", "Article 17"]),
            entry("consent", &["conditions for consent", "Article 7 withdrawal"]),
            entry("fines", &["administrative fines", "Article 83 penalties"]),
            entry("penalties", &["administrative fines Article 83", "sanctions"]),
            entry(
                "security",
                &[
                    "security of processing",
                    "Article 32 technical and organisational measures",
                ],
            ),
            entry(
                "dpia",
                &["data protection impact assessment", "Article 35 high risk"],
            ),
            entry(
                "transfer",
                &["transfers to third countries", "Article 44 adequacy decision"],
            ),
            entry(
                "biometric",
                &["special categories of personal data", "Article 9"],
            ),
            entry(
                "machine learning",
                &["automated decision-making", "profiling Article 22"],
            ),
            entry("ai", &["automated decision-making", "profiling Article 22"]),
            entry(
                "rights",
                &[
                    "data subject rights",
                    "access rectification erasure portability",
                ],
            ),
            entry(
                "unauthorized access",
                &["personal data breach", "security of processing Article 32"],
            ),
        ])
    }

    pub fn entries(&self) -> &[SynonymEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::compliance_defaults()
    }
}
