use async_trait::async_trait;

use crate::errors::RegulaResult;
use crate::models::GenerationOptions;

/// The LLM text-generation capability.
///
/// One call per grounded answer. Retry logic belongs to the transport
/// wrapper around the implementation, never to the grounding layer.
#[async_trait]
pub trait IGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> RegulaResult<String>;
}
