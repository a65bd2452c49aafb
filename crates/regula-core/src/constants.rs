/// Regula system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Refusal reason when the supplied passages do not contain the answer.
pub const REFUSAL_NOT_FOUND: &str = "not found in documents";

/// Refusal reason when the outer response deadline expires.
pub const REFUSAL_TIMEOUT: &str = "timeout";
