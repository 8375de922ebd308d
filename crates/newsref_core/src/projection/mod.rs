//! Client-side list projection.
//!
//! # Responsibility
//! - Filter the full collection by free-text query.
//! - Reveal matches page by page for incremental loading.
//!
//! # Invariants
//! - Filtering always rescans the full collection.
//! - A new query resets the page to 1.

pub mod list_view;
