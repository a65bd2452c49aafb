//! Content fingerprinting: blake3 over whitespace-normalized text.
//!
//! The same normalization feeds the change detector's similarity scoring,
//! so formatting-only edits never register as changes.

/// Normalize passage text: lowercase, collapse whitespace runs to single
/// spaces, trim.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Hex blake3 digest of the normalized text.
pub fn fingerprint(text: &str) -> String {
    blake3::hash(normalize(text).as_bytes())
        .to_hex()
        .to_string()
}
