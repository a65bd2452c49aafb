use async_trait::async_trait;

use crate::errors::RegulaResult;
use crate::models::ScoredCandidate;
use crate::passage::RegulationTag;

/// The external keyword/semantic index, used as a black box.
///
/// Implementations must return stable passage ids across calls. An
/// unreachable index surfaces as `RetrievalError::Unavailable`; the
/// retriever never degrades silently to partial results.
#[async_trait]
pub trait IPassageIndex: Send + Sync {
    /// Exact-term relevance search (BM25-class scoring).
    async fn keyword_search(
        &self,
        query: &str,
        filter: Option<&RegulationTag>,
        limit: usize,
    ) -> RegulaResult<Vec<ScoredCandidate>>;

    /// Embedding-similarity search. The index embeds the query itself;
    /// passage embeddings are opaque to this core.
    async fn semantic_search(
        &self,
        query: &str,
        filter: Option<&RegulationTag>,
        limit: usize,
    ) -> RegulaResult<Vec<ScoredCandidate>>;
}
