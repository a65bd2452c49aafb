//! Error taxonomy: one enum per subsystem plus the [`RegulaError`] umbrella.

pub mod config_error;
pub mod diff_error;
pub mod fallback_error;
pub mod grounding_error;
pub mod retrieval_error;

pub use config_error::ConfigError;
pub use diff_error::DiffError;
pub use fallback_error::FallbackError;
pub use grounding_error::GroundingError;
pub use retrieval_error::RetrievalError;

/// Umbrella error for the whole pipeline.
#[derive(Debug, thiserror::Error)]
pub enum RegulaError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Grounding(#[from] GroundingError),

    #[error(transparent)]
    Fallback(#[from] FallbackError),

    #[error(transparent)]
    Diff(#[from] DiffError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias used across the workspace.
pub type RegulaResult<T> = Result<T, RegulaError>;
