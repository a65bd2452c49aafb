//! Edit-distance similarity over normalized passage text.
//!
//! Shares normalization with the fingerprint scheme, so formatting-only
//! edits score 1.0 before any distance work. Chosen over token-set overlap
//! because regulation edits are typically word substitutions: a deadline
//! change ("30 days" to "15 days") must still score high.

use regula_core::passage::fingerprint::normalize;

/// Levenshtein distance between two strings, char-granular, two-row DP.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(prev[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut prev, &mut current);
    }
    prev[b.len()]
}

/// Similarity ratio in [0, 1] between two passages' normalized texts:
/// `1 - distance / max_len`. Identical normalized text is 1.0 without
/// running the DP; an empty side against a non-empty one is 0.0.
pub fn similarity(old_text: &str, new_text: &str) -> f64 {
    let a = normalize(old_text);
    let b = normalize(new_text);
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let max_len = a.chars().count().max(b.chars().count());
    1.0 - levenshtein(&a, &b) as f64 / max_len as f64
}
