use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Regulation a passage belongs to.
///
/// The built-in set covers the regulations the ingestion pipeline currently
/// indexes; anything else round-trips through [`RegulationTag::Other`] by its
/// display name, so new regulations need no code change to flow through.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegulationTag {
    Gdpr,
    Ccpa,
    Hipaa,
    Dora,
    AiAct,
    /// A regulation outside the built-in set, carried by its display name.
    Other(String),
}

impl RegulationTag {
    /// Canonical display name ("GDPR", "CCPA", ...).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Gdpr => "GDPR",
            Self::Ccpa => "CCPA",
            Self::Hipaa => "HIPAA",
            Self::Dora => "DORA",
            Self::AiAct => "EU AI Act",
            Self::Other(name) => name,
        }
    }

    /// Parse a display name, case-insensitive. Unknown names become `Other`
    /// with the original spelling preserved.
    pub fn from_name(name: &str) -> Self {
        match name.to_uppercase().as_str() {
            "GDPR" => Self::Gdpr,
            "CCPA" => Self::Ccpa,
            "HIPAA" => Self::Hipaa,
            "DORA" => Self::Dora,
            "EU AI ACT" | "AI ACT" => Self::AiAct,
            _ => Self::Other(name.to_string()),
        }
    }

    /// Infer a tag from characteristic query vocabulary.
    ///
    /// Used by the curated fallback lookup when the caller supplied no
    /// explicit regulation filter. More specific vocabularies are checked
    /// first so "california consumer privacy" lands on CCPA, not GDPR.
    pub fn infer(query: &str) -> Option<Self> {
        const CCPA_TERMS: &[&str] = &["ccpa", "california", "consumer privacy", "opt-out of sale"];
        const HIPAA_TERMS: &[&str] = &["hipaa", "phi", "protected health", "covered entity"];
        const GDPR_TERMS: &[&str] = &[
            "gdpr",
            "data protection",
            "privacy",
            "consent",
            "erasure",
            "controller",
            "supervisory authority",
        ];

        let lower = query.to_lowercase();
        if CCPA_TERMS.iter().any(|t| lower.contains(t)) {
            return Some(Self::Ccpa);
        }
        if HIPAA_TERMS.iter().any(|t| lower.contains(t)) {
            return Some(Self::Hipaa);
        }
        if GDPR_TERMS.iter().any(|t| lower.contains(t)) {
            return Some(Self::Gdpr);
        }
        None
    }
}

impl fmt::Display for RegulationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized as the display name so index filters and fixtures stay
/// readable ("GDPR", not "gdpr" or an enum index).
impl Serialize for RegulationTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RegulationTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}
