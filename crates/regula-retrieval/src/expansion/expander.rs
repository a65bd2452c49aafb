//! Expands a raw query into weighted variants.
//!
//! The original query is always the first variant at weight 1.0. Expansion
//! variants append (never replace) synonym phrases at a reduced weight, so
//! an expansion can surface passages but cannot outrank direct evidence.

use regula_core::config::ExpansionConfig;
use regula_core::errors::{RegulaResult, RetrievalError};
use regula_core::models::QueryVariant;
use regula_core::passage::RegulationTag;
use tracing::debug;

use super::synonym_table::SynonymTable;

/// Case-insensitive whole-word containment. `term` may span several words;
/// word boundaries are any non-alphanumeric characters.
fn contains_term(query_lower: &str, term_lower: &str) -> bool {
    if term_lower.is_empty() {
        return false;
    }
    let mut start = 0;
    while let Some(pos) = query_lower[start..].find(term_lower) {
        let begin = start + pos;
        let end = begin + term_lower.len();
        let before_ok = query_lower[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = query_lower[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        start = end;
    }
    false
}

/// Expand `query` into up to `max_variants` weighted variants.
///
/// Order is deterministic: the original first, then the regulation-name
/// variant when a filter is set and the query does not already mention the
/// regulation, then synonym expansions in table order. Duplicate variant
/// texts are skipped.
///
/// Returns [`RetrievalError::InvalidQuery`] for an empty or whitespace query.
pub fn expand(
    query: &str,
    filter: Option<&RegulationTag>,
    table: &SynonymTable,
    config: &ExpansionConfig,
) -> RegulaResult<Vec<QueryVariant>> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(RetrievalError::InvalidQuery.into());
    }

    let mut variants = vec![QueryVariant::original(trimmed)];
    let query_lower = trimmed.to_lowercase();

    // The regulation's own name is the strongest expansion signal when the
    // query doesn't already carry it.
    if config.append_regulation_name {
        if let Some(tag) = filter {
            if !contains_term(&query_lower, &tag.as_str().to_lowercase())
                && variants.len() < config.max_variants
            {
                variants.push(QueryVariant::expanded(
                    trimmed,
                    tag.as_str(),
                    config.expansion_weight,
                ));
            }
        }
    }

    for entry in table.entries() {
        if variants.len() >= config.max_variants {
            break;
        }
        if !contains_term(&query_lower, &entry.term.to_lowercase()) {
            continue;
        }
        for phrase in &entry.expansions {
            if variants.len() >= config.max_variants {
                break;
            }
            let candidate = QueryVariant::expanded(trimmed, phrase, config.expansion_weight);
            if variants.iter().any(|v| v.text == candidate.text) {
                continue;
            }
            variants.push(candidate);
        }
    }

    debug!(count = variants.len(), query = %trimmed, "expanded query");
    Ok(variants)
}
