//! Collaborator boundary: traits for the external services this core calls.

pub mod generator;
pub mod index;
pub mod web;

pub use generator::IGenerator;
pub use index::IPassageIndex;
pub use web::IWebSearch;
