//! Behavior tests for the fallback resolver.
//!
//! The mock web search is scripted per scenario: canned hits, a forced
//! error, or a future that never resolves (for the timeout path). The
//! curated tier is the real static table.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use regula_core::config::FallbackConfig;
use regula_core::errors::{FallbackError, RegulaResult};
use regula_core::models::{FallbackResult, WebHit};
use regula_core::passage::RegulationTag;
use regula_core::traits::IWebSearch;
use regula_fallback::FallbackEngine;

// ---------------------------------------------------------------------------
// Mock web search
// ---------------------------------------------------------------------------

enum WebBehavior {
    Hits(Vec<WebHit>),
    Fail,
    Hang,
}

struct MockWeb {
    behavior: WebBehavior,
    calls: AtomicUsize,
}

impl MockWeb {
    fn hits(hits: Vec<WebHit>) -> Self {
        Self {
            behavior: WebBehavior::Hits(hits),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            behavior: WebBehavior::Fail,
            calls: AtomicUsize::new(0),
        }
    }

    fn hanging() -> Self {
        Self {
            behavior: WebBehavior::Hang,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IWebSearch for MockWeb {
    async fn search(&self, _query: &str, limit: usize) -> RegulaResult<Vec<WebHit>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            WebBehavior::Hits(hits) => Ok(hits.iter().take(limit).cloned().collect()),
            WebBehavior::Fail => Err(FallbackError::SearchFailed {
                reason: "search backend down".to_string(),
            }
            .into()),
            WebBehavior::Hang => {
                futures::future::pending::<()>().await;
                unreachable!()
            }
        }
    }
}

fn hit(title: &str, url: &str, snippet: &str) -> WebHit {
    WebHit {
        title: title.to_string(),
        url: url.to_string(),
        snippet: snippet.to_string(),
    }
}

fn config(timeout_ms: u64, max_sources: usize) -> FallbackConfig {
    FallbackConfig {
        web_timeout_ms: timeout_ms,
        max_sources,
    }
}

// ---------------------------------------------------------------------------
// Web tier
// ---------------------------------------------------------------------------

#[tokio::test]
async fn web_hits_become_a_trusted_first_digest() {
    let web = MockWeb::hits(vec![
        hit("Some blog take", "https://blog.example.com/gdpr", "opinions"),
        hit(
            "Personal data breaches",
            "https://ico.org.uk/for-organisations/breaches/",
            "what to report and when",
        ),
        hit("Forum thread", "https://forum.example.org/t/1", "hearsay"),
        hit(
            "Guidelines 9/2022",
            "https://edpb.europa.eu/guidelines-92022",
            "breach notification guidance",
        ),
        hit("Aggregator", "https://news.example.net/item", "summary"),
    ]);
    let engine = FallbackEngine::new(&web, config(5_000, 4));

    let result = engine.resolve("data breach notification", None).await;
    let FallbackResult::WebAnswer { text, sources } = result else {
        panic!("expected WebAnswer");
    };

    assert_eq!(sources.len(), 4);
    // Trusted first, original search order preserved within each class.
    assert!(sources[0].trusted);
    assert!(sources[0].url.contains("ico.org.uk"));
    assert!(sources[1].trusted);
    assert!(sources[1].url.contains("edpb.europa.eu"));
    assert!(!sources[2].trusted);
    assert!(sources[2].url.contains("blog.example.com"));
    assert!(!sources[3].trusted);
    assert!(sources[3].url.contains("forum.example.org"));

    assert_eq!(text.lines().count(), 4);
    assert!(text.starts_with("• Personal data breaches: what to report and when"));
    assert_eq!(web.call_count(), 1);
}

#[tokio::test]
async fn trusted_hit_beyond_the_cap_displaces_untrusted_ones() {
    let web = MockWeb::hits(vec![
        hit("u1", "https://a.example.com/", "a"),
        hit("u2", "https://b.example.com/", "b"),
        hit("u3", "https://c.example.com/", "c"),
        hit("u4", "https://d.example.com/", "d"),
        hit("HIPAA index", "https://www.hhs.gov/hipaa/", "rules index"),
    ]);
    let engine = FallbackEngine::new(&web, config(5_000, 4));

    let result = engine.resolve("phi disclosure rules", None).await;
    let FallbackResult::WebAnswer { sources, .. } = result else {
        panic!("expected WebAnswer");
    };

    assert_eq!(sources.len(), 4);
    assert!(sources[0].trusted);
    assert!(sources[0].url.contains("hhs.gov"));
    assert_eq!(sources[1].title, "u1");
    assert_eq!(sources[3].title, "u3");
}

// ---------------------------------------------------------------------------
// Fall-through to the curated tier
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_failure_falls_through_to_curated() {
    let web = MockWeb::failing();
    let engine = FallbackEngine::new(&web, FallbackConfig::default());

    let result = engine
        .resolve("right to erasure", Some(&RegulationTag::Gdpr))
        .await;
    let FallbackResult::CuratedAnswer { sources } = result else {
        panic!("expected CuratedAnswer");
    };

    assert_eq!(sources.len(), 3);
    assert!(sources.iter().all(|s| s.trusted));
    assert_eq!(web.call_count(), 1);
}

#[tokio::test]
async fn empty_hits_fall_through_to_curated() {
    let web = MockWeb::hits(Vec::new());
    let engine = FallbackEngine::new(&web, FallbackConfig::default());

    let result = engine
        .resolve("deletion deadlines", Some(&RegulationTag::Ccpa))
        .await;
    let FallbackResult::CuratedAnswer { sources } = result else {
        panic!("expected CuratedAnswer");
    };
    assert_eq!(sources.len(), 1);
    assert!(sources[0].url.contains("oag.ca.gov"));
}

#[tokio::test]
async fn curated_lookup_infers_regulation_from_the_query() {
    let web = MockWeb::failing();
    let engine = FallbackEngine::new(&web, FallbackConfig::default());

    let result = engine.resolve("consent withdrawal rules", None).await;
    let FallbackResult::CuratedAnswer { sources } = result else {
        panic!("expected CuratedAnswer");
    };
    assert!(sources[0].url.contains("ico.org.uk"));
}

#[tokio::test]
async fn explicit_filter_beats_query_inference() {
    let web = MockWeb::failing();
    let engine = FallbackEngine::new(&web, FallbackConfig::default());

    let result = engine
        .resolve("gdpr-style erasure rights", Some(&RegulationTag::Ccpa))
        .await;
    let FallbackResult::CuratedAnswer { sources } = result else {
        panic!("expected CuratedAnswer");
    };
    assert_eq!(sources.len(), 1);
    assert!(sources[0].url.contains("oag.ca.gov"));
}

// ---------------------------------------------------------------------------
// Timeout and the explicit empty terminal
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn hanging_search_is_cancelled_at_the_timeout() {
    let web = MockWeb::hanging();
    let engine = FallbackEngine::new(&web, config(100, 4));

    let started = tokio::time::Instant::now();
    let result = engine
        .resolve("breach notification", Some(&RegulationTag::Gdpr))
        .await;
    let elapsed = started.elapsed();

    assert!(matches!(result, FallbackResult::CuratedAnswer { .. }));
    assert!(elapsed >= Duration::from_millis(100));
    assert!(
        elapsed < Duration::from_millis(200),
        "resolver overran the timeout: {elapsed:?}"
    );
    assert_eq!(web.call_count(), 1);
}

#[tokio::test]
async fn uncovered_regulation_is_an_explicit_no_fallback() {
    let web = MockWeb::failing();
    let engine = FallbackEngine::new(&web, FallbackConfig::default());

    let result = engine
        .resolve("ict incident reporting", Some(&RegulationTag::Dora))
        .await;
    assert_eq!(result, FallbackResult::NoFallback);
}

#[tokio::test]
async fn unrecognized_query_without_filter_is_no_fallback() {
    let web = MockWeb::hits(Vec::new());
    let engine = FallbackEngine::new(&web, FallbackConfig::default());

    let result = engine.resolve("quarterly tax filing deadline", None).await;
    assert_eq!(result, FallbackResult::NoFallback);
}
