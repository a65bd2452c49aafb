//! Trusted-domain set and the curated source table.
//!
//! The curated table is a fixed mapping maintained by hand; it is the tier
//! of last resort and never generated. Lookup is by explicit regulation tag
//! when the caller supplied one, otherwise by vocabulary inference over the
//! query ([`RegulationTag::infer`]).

use regula_core::models::FallbackSource;
use regula_core::passage::RegulationTag;

/// Domains whose hits are surfaced ahead of everything else. Regulators,
/// official texts, and established compliance bodies only.
pub const TRUSTED_DOMAINS: &[&str] = &[
    "ico.org.uk",
    "edpb.europa.eu",
    "gdpr-info.eu",
    "eur-lex.europa.eu",
    "oag.ca.gov",
    "nist.gov",
    "enisa.europa.eu",
    "iapp.org",
    "hhs.gov",
];

/// True when the URL's host is a trusted domain or a subdomain of one.
/// Matching is on the host only; a trusted name in the path does not count.
pub fn is_trusted(url: &str) -> bool {
    let host = host(url).to_lowercase();
    TRUSTED_DOMAINS.iter().any(|domain| {
        host == *domain
            || host
                .strip_suffix(domain)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

/// Extract the host portion of a URL: scheme, userinfo, port, path, query
/// and fragment stripped.
fn host(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    host.split_once(':').map_or(host, |(h, _)| h)
}

/// Static sources for a regulation tag, all trusted. `None` for tags the
/// table does not cover; the resolver maps that to
/// [`FallbackResult::NoFallback`](regula_core::models::FallbackResult).
pub fn curated_sources(tag: &RegulationTag) -> Option<Vec<FallbackSource>> {
    match tag {
        RegulationTag::Gdpr => Some(vec![
            source(
                "ICO - Guide to the UK GDPR",
                "https://ico.org.uk/for-organisations/uk-gdpr-guidance-and-resources/",
                "UK regulator guidance on data protection obligations and rights.",
            ),
            source(
                "EDPB - Guidelines and Recommendations",
                "https://edpb.europa.eu/our-work-tools/general-guidance/guidelines-recommendations-best-practices_en",
                "European Data Protection Board interpretive guidance on the GDPR.",
            ),
            source(
                "GDPR full text",
                "https://gdpr-info.eu/",
                "Searchable full text of Regulation (EU) 2016/679 by article.",
            ),
        ]),
        RegulationTag::Ccpa => Some(vec![source(
            "California Attorney General - CCPA",
            "https://oag.ca.gov/privacy/ccpa",
            "Official California Consumer Privacy Act guidance and regulations.",
        )]),
        RegulationTag::Hipaa => Some(vec![source(
            "HHS - HIPAA for Professionals",
            "https://www.hhs.gov/hipaa/for-professionals/index.html",
            "U.S. Department of Health and Human Services HIPAA rules index.",
        )]),
        _ => None,
    }
}

/// Table lookup: explicit tag when given, vocabulary inference otherwise.
///
/// An explicit tag without a table entry is a miss, not a cue to infer a
/// different regulation from the query.
pub fn lookup(filter: Option<&RegulationTag>, query: &str) -> Option<Vec<FallbackSource>> {
    match filter {
        Some(tag) => curated_sources(tag),
        None => RegulationTag::infer(query).and_then(|tag| curated_sources(&tag)),
    }
}

fn source(title: &str, url: &str, description: &str) -> FallbackSource {
    FallbackSource {
        title: title.to_string(),
        url: url.to_string(),
        description: description.to_string(),
        trusted: true,
    }
}
