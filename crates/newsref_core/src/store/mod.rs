//! Article store: remote-API-shaped CRUD over one persisted collection.
//!
//! # Responsibility
//! - Define the `ArticleApi` contract callers program against.
//! - Implement it locally over a `StorageBackend` blob.
//!
//! # Invariants
//! - The whole collection lives under one storage key as a JSON array.
//! - New articles are prepended; updates keep position and id.
//! - Every operation waits on the injected latency before touching storage.

pub mod article_store;
pub mod latency;
pub mod seed;
