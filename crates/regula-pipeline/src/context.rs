use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Identity and timing for one in-flight request.
///
/// Lives only for the duration of the call; the request id goes into the
/// tracing span so every log line of the request carries it.
#[derive(Debug)]
pub(crate) struct RequestContext {
    pub request_id: Uuid,
    pub started_at: DateTime<Utc>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            started_at: Utc::now(),
        }
    }

    /// Wall-clock milliseconds since the request started.
    pub fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.started_at).num_milliseconds()
    }
}
