use serde::{Deserialize, Serialize};

/// A rewritten form of the user's question produced by query expansion.
///
/// Ephemeral: created per request, discarded after retrieval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryVariant {
    /// Full query text sent to both search methods.
    pub text: String,
    /// Expansion phrases appended to the original; empty for the original.
    pub terms: Vec<String>,
    /// Confidence in the rewrite, in [0, 1]. The original is always 1.0.
    pub weight: f64,
}

impl QueryVariant {
    /// The user's question, untouched, weight 1.0.
    pub fn original(text: &str) -> Self {
        Self {
            text: text.to_string(),
            terms: Vec::new(),
            weight: 1.0,
        }
    }

    /// A variant produced by appending `phrase` to the original query.
    pub fn expanded(original: &str, phrase: &str, weight: f64) -> Self {
        Self {
            text: format!("{} {}", original, phrase),
            terms: vec![phrase.to_string()],
            weight,
        }
    }
}
