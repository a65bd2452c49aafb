//! # regula-fallback
//!
//! The fallback tier behind a refused answer: external sources, clearly
//! separated from the grounded citation path.
//!
//! - **Web tier**: one timed search attempt, trusted domains surfaced first
//! - **Curated tier**: a fixed per-regulation source table for when the web
//!   tier fails, times out, or returns nothing
//! - **`NoFallback`**: the explicit empty terminal, never an error
//!
//! The entry point is [`FallbackEngine`], which borrows an
//! [`IWebSearch`](regula_core::traits::IWebSearch) implementation;
//! [`SearchApiClient`] is the production implementation of that trait.

pub mod client;
pub mod curated;
pub mod engine;

pub use client::SearchApiClient;
pub use engine::FallbackEngine;
