//! Citation marker parsing and validation.
//!
//! The parser is a strict validator over a closed set of shapes: a marker is
//! `[digits]` whose value lies in `1..=passage_count`, no leading zeros.
//! Anything else is a [`GroundingError::CitationIntegrity`]; there is no
//! best-effort extraction.

use std::sync::LazyLock;

use regex::Regex;
use regula_core::errors::GroundingError;
use regula_core::models::{Citation, FusedResult};

use crate::prompt;

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(\d+)\]").unwrap());

/// Extract and validate every `[n]` marker in `response`.
///
/// Returns the marker values in order of appearance (duplicates kept).
/// A response without any marker is [`GroundingError::UncitedResponse`];
/// any marker outside `1..=passage_count` is
/// [`GroundingError::CitationIntegrity`].
pub fn validate_markers(
    response: &str,
    passage_count: usize,
) -> Result<Vec<u32>, GroundingError> {
    let mut markers = Vec::new();
    for capture in MARKER_RE.captures_iter(response) {
        markers.push(parse_marker(&capture[1], passage_count)?);
    }
    if markers.is_empty() {
        return Err(GroundingError::UncitedResponse);
    }
    Ok(markers)
}

fn parse_marker(digits: &str, passage_count: usize) -> Result<u32, GroundingError> {
    let out_of_range = || GroundingError::CitationIntegrity {
        marker: digits.to_string(),
        passage_count,
    };
    // The prompt never produces labels with leading zeros; a response that
    // does is not citing the prompt.
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(out_of_range());
    }
    let value: u64 = digits.parse().map_err(|_| out_of_range())?;
    if value == 0 || value > passage_count as u64 {
        return Err(out_of_range());
    }
    Ok(value as u32)
}

/// Build the citation list for a response: one entry per prompt passage,
/// ids 1..=n in rank order, snippet equal to the span quoted into the
/// prompt.
pub fn citation_list(results: &[FusedResult], snippet_budget: usize) -> Vec<Citation> {
    results
        .iter()
        .enumerate()
        .map(|(i, result)| Citation {
            id: (i + 1) as u32,
            passage_id: result.passage.id.clone(),
            source_doc: result.passage.source_doc.clone(),
            regulation: result.passage.regulation.clone(),
            location: result.passage.location.clone(),
            snippet: prompt::snippet(&result.passage.text, snippet_budget).to_string(),
        })
        .collect()
}
