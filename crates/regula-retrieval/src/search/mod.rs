//! Search-side primitives: per-variant result collection and score fusion.

pub mod fusion;

pub use fusion::{fuse, VariantResults};
