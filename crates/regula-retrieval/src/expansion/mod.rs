//! Query expansion: one original variant plus synonym-derived rewrites.

pub mod expander;
pub mod synonym_table;

pub use expander::expand;
pub use synonym_table::SynonymTable;
