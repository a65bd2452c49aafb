/// Errors raised by query expansion and hybrid search.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("query is empty")]
    InvalidQuery,

    #[error("index unavailable: {reason}")]
    Unavailable { reason: String },
}
