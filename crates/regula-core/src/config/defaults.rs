//! Default values for every tunable. Product-tuned, not mandated: all of
//! these are overridable through [`super::RegulaConfig`].

/// Semantic share of the fused score; the remainder is keyword weight.
pub const DEFAULT_FUSION_ALPHA: f64 = 0.3;

/// Fused results handed to the assembler.
pub const DEFAULT_TOP_K: usize = 5;

/// Per-method over-fetch multiplier (search limit = top_k * factor).
pub const DEFAULT_OVER_FETCH_FACTOR: usize = 3;

/// Cap on query variants, the original included.
pub const DEFAULT_MAX_VARIANTS: usize = 5;

/// Weight assigned to expansion-derived variants.
pub const DEFAULT_EXPANSION_WEIGHT: f64 = 0.7;

/// Similarity at or above which an old/new passage pair counts as Modified.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Hard timeout for the single web-search attempt (milliseconds).
pub const DEFAULT_WEB_TIMEOUT_MS: u64 = 5_000;

/// Maximum external sources surfaced by the fallback tier.
pub const DEFAULT_MAX_FALLBACK_SOURCES: usize = 4;

/// Generation sampling temperature; low keeps answers literal.
pub const DEFAULT_TEMPERATURE: f64 = 0.1;

/// Generation token ceiling.
pub const DEFAULT_MAX_TOKENS: u32 = 1_500;

/// Per-passage character budget inside the prompt.
pub const DEFAULT_PASSAGE_CHAR_BUDGET: usize = 500;

/// Outer deadline across the whole answer path (milliseconds).
pub const DEFAULT_DEADLINE_MS: u64 = 30_000;
