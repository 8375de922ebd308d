//! Article domain model.
//!
//! # Responsibility
//! - Define the persisted article record and the draft submitted by callers.
//! - Own draft validation used before any store write.
//!
//! # Invariants
//! - Every stored article carries a non-empty, immutable `ArticleId`.
//! - The serialized record shape is `id, title, summary, date, publisher`.

pub mod article;
