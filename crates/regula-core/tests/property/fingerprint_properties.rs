//! Property tests for text normalization and fingerprint stability.

use proptest::prelude::*;
use regula_core::passage::fingerprint::{fingerprint, normalize};

proptest! {
    /// Normalization is idempotent.
    #[test]
    fn normalize_is_idempotent(text in ".{0,200}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Fingerprints ignore leading/trailing/internal whitespace runs.
    #[test]
    fn fingerprint_is_whitespace_invariant(
        words in proptest::collection::vec("[a-z]{1,10}", 1..20),
        pads in proptest::collection::vec("[ \t\n]{1,3}", 1..20),
    ) {
        let plain = words.join(" ");
        let padded: String = words
            .iter()
            .zip(pads.iter().cycle())
            .map(|(w, p)| format!("{}{}", p, w))
            .collect::<String>() + "  ";
        prop_assert_eq!(fingerprint(&plain), fingerprint(&padded));
    }

    /// Fingerprints ignore case.
    #[test]
    fn fingerprint_is_case_invariant(text in "[a-zA-Z ]{1,100}") {
        prop_assert_eq!(fingerprint(&text), fingerprint(&text.to_uppercase()));
    }
}
