//! Prompt construction for citation-constrained answering.
//!
//! Passages are rendered as numbered evidence blocks whose labels double as
//! citation ids, so a marker `[n]` in the response always resolves to block
//! `n` of the prompt.

use regula_core::models::FusedResult;
use regula_core::passage::RegulationTag;

/// Fixed system instruction. Non-negotiable: the generator answers only from
/// the numbered passages and marks every factual claim with `[n]`.
pub const SYSTEM_INSTRUCTION: &str = "You are a regulatory compliance assistant. \
Answer the question using ONLY the numbered regulation passages provided below. \
Attach a bracketed citation number such as [1] to every factual claim, referring \
to the passage that supports it. Do not use any knowledge beyond the provided \
passages. If the passages do not contain the information needed to answer, reply \
exactly: \"I cannot find sufficient information in the provided regulation \
documents to answer this question.\"";

/// The designated insufficiency reply the instruction asks for.
pub const INSUFFICIENT_ANSWER: &str = "I cannot find sufficient information in \
the provided regulation documents to answer this question.";

/// Paraphrases the insufficiency detector also accepts. Generators reword the
/// designated sentence often enough that exact matching alone leaks
/// hallucinated answers through.
const INSUFFICIENT_PARAPHRASES: &[&str] = &[
    "cannot find sufficient information",
    "do not contain enough information",
    "does not contain enough information",
    "no relevant context",
    "not covered by the provided",
];

/// True when the response is the designated insufficiency reply or one of
/// its accepted paraphrases, matched case-insensitively.
pub fn is_insufficient(response: &str) -> bool {
    let lower = response.to_lowercase();
    INSUFFICIENT_PARAPHRASES
        .iter()
        .any(|phrase| lower.contains(phrase))
}

/// Truncate to at most `budget` chars, on a char boundary.
pub fn snippet(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// One numbered evidence block:
/// `[i] Source: {REGULATION} - {source_doc}, Page(s) {pages}` + passage text.
fn passage_block(label: usize, result: &FusedResult, budget: usize) -> String {
    let passage = &result.passage;
    format!(
        "[{}] Source: {} - {}, Page(s) {}\n{}",
        label,
        passage.regulation.as_str(),
        passage.source_doc,
        passage.location.pages_label(),
        snippet(&passage.text, budget)
    )
}

/// Build the single-regulation answer prompt.
///
/// Blocks appear in rank order with 1-based labels and are joined by
/// `\n---\n`; the question and an `Answer:` cue follow.
pub fn build_prompt(question: &str, results: &[FusedResult], budget: usize) -> String {
    let blocks: Vec<String> = results
        .iter()
        .enumerate()
        .map(|(i, result)| passage_block(i + 1, result, budget))
        .collect();

    format!(
        "{}\n\nRegulation passages:\n\n{}\n\nQuestion: {}\n\nAnswer:",
        SYSTEM_INSTRUCTION,
        blocks.join("\n---\n"),
        question
    )
}

/// Build the two-regulation comparison prompt.
///
/// Left passages are numbered 1..=n and right passages n+1..=n+m, each
/// section headed by its regulation name, so citation numbering stays
/// continuous across the whole prompt.
pub fn build_comparison_prompt(
    question: &str,
    left_tag: &RegulationTag,
    left: &[FusedResult],
    right_tag: &RegulationTag,
    right: &[FusedResult],
    budget: usize,
) -> String {
    let mut sections = String::new();
    sections.push_str(&comparison_section(left_tag, left, 1, budget));
    sections.push_str("\n\n");
    sections.push_str(&comparison_section(right_tag, right, left.len() + 1, budget));

    format!(
        "{}\n\n{}\n\nQuestion: Compare how the regulations above address the following: {}\n\nAnswer:",
        SYSTEM_INSTRUCTION, sections, question
    )
}

fn comparison_section(
    tag: &RegulationTag,
    results: &[FusedResult],
    first_label: usize,
    budget: usize,
) -> String {
    if results.is_empty() {
        return format!(
            "{} passages:\n\nNo passages were retrieved for this regulation.",
            tag.as_str()
        );
    }
    let blocks: Vec<String> = results
        .iter()
        .enumerate()
        .map(|(i, result)| passage_block(first_label + i, result, budget))
        .collect();
    format!("{} passages:\n\n{}", tag.as_str(), blocks.join("\n---\n"))
}
