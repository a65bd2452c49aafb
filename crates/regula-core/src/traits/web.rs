use async_trait::async_trait;

use crate::errors::RegulaResult;
use crate::models::WebHit;

/// External web-search capability.
///
/// The fallback resolver owns the timeout and cancels the in-flight call on
/// expiry; implementations just search.
#[async_trait]
pub trait IWebSearch: Send + Sync {
    async fn search(&self, query: &str, limit: usize) -> RegulaResult<Vec<WebHit>>;
}
