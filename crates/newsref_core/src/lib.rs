//! Core domain logic for newsref, a personal list of article references.
//! This crate owns the article store, its storage backends and the list
//! projection; front ends only supply input and render results.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod projection;
pub mod service;
pub mod storage;
pub mod store;

pub use config::{ConfigError, StoreConfig, DEFAULT_LATENCY_MS, DEFAULT_STORAGE_KEY};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::article::{
    Article, ArticleDraft, ArticleField, ArticleId, ArticleValidationError,
};
pub use projection::list_view::{matches_query, project, ListQuery, Projection, PAGE_SIZE};
pub use service::article_service::{ArticleListService, ServiceError};
pub use storage::{InMemoryBackend, SqliteBackend, StorageBackend, StorageError, StorageResult};
pub use store::article_store::{
    decode_collection, encode_collection, ApiResponse, ArticleApi, LocalArticleStore,
    StatusCode, StoreError, StoreResult,
};
pub use store::latency::{FixedLatency, Latency, NoLatency};
pub use store::seed::seed_articles;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
