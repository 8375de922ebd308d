//! Article API contract and local blob-backed implementation.
//!
//! # Responsibility
//! - Provide create/list/update/delete/get-by-id over the article collection.
//! - Shape results like HTTP responses so a network client can replace the
//!   local store without touching callers.
//!
//! # Invariants
//! - Reads reject unparseable persisted state instead of masking it.
//! - Apart from first-access seeding, a failed operation leaves the
//!   persisted collection untouched.
//! - Every operation waits on the injected latency exactly once before it
//!   touches storage, whether it succeeds or fails.
//! - The collection is seeded at most once, only when the key is absent.

use crate::config::StoreConfig;
use crate::model::article::{Article, ArticleDraft, ArticleId};
use crate::storage::{StorageBackend, StorageError};
use crate::store::latency::{FixedLatency, Latency};
use crate::store::seed::seed_articles;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// HTTP-style status attached to store responses and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(u16);

impl StatusCode {
    pub const OK: Self = Self(200);
    pub const CREATED: Self = Self(201);
    pub const NOT_FOUND: Self = Self(404);
    pub const INTERNAL_SERVER_ERROR: Self = Self(500);

    pub fn as_u16(self) -> u16 {
        self.0
    }

    pub fn is_success(self) -> bool {
        (200..300).contains(&self.0)
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Successful store response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: StatusCode,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            data,
            status: StatusCode::OK,
        }
    }

    fn created(data: T) -> Self {
        Self {
            data,
            status: StatusCode::CREATED,
        }
    }
}

/// Store-level failure surfaced to the direct caller.
#[derive(Debug)]
pub enum StoreError {
    /// No article carries the requested id.
    NotFound(ArticleId),
    /// Backend could not be read or written.
    Storage(StorageError),
    /// Persisted blob exists but is not a valid article collection.
    CorruptedState { key: String, message: String },
    /// Collection could not be serialized for persistence.
    Encode(serde_json::Error),
}

impl StoreError {
    /// Status a network API would answer with for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::CorruptedState { .. } | Self::Encode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Storage(err) => err.code(),
            Self::CorruptedState { .. } => "corrupted_state",
            Self::Encode(_) => "encode_failed",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "Article not found: {id}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::CorruptedState { key, message } => {
                write!(f, "persisted collection under `{key}` is corrupted: {message}")
            }
            Self::Encode(err) => write!(f, "failed to encode article collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::NotFound(_) | Self::CorruptedState { .. } => None,
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Remote-API-shaped article contract.
///
/// Every method takes `&mut self`: a call runs its read-modify-persist
/// sequence to completion before another can start.
pub trait ArticleApi {
    /// Returns the full collection in stored order.
    fn list(&mut self) -> StoreResult<ApiResponse<Vec<Article>>>;
    /// Assigns a fresh id and prepends the new article.
    fn create(&mut self, draft: ArticleDraft) -> StoreResult<ApiResponse<Article>>;
    /// Replaces content fields in place, keeping id and position.
    fn update(&mut self, id: &ArticleId, draft: ArticleDraft)
        -> StoreResult<ApiResponse<Article>>;
    /// Removes the article with the given id.
    fn delete(&mut self, id: &ArticleId) -> StoreResult<ApiResponse<()>>;
    /// Returns the article with the given id.
    fn get_by_id(&mut self, id: &ArticleId) -> StoreResult<ApiResponse<Article>>;
}

impl<A: ArticleApi + ?Sized> ArticleApi for Box<A> {
    fn list(&mut self) -> StoreResult<ApiResponse<Vec<Article>>> {
        (**self).list()
    }

    fn create(&mut self, draft: ArticleDraft) -> StoreResult<ApiResponse<Article>> {
        (**self).create(draft)
    }

    fn update(
        &mut self,
        id: &ArticleId,
        draft: ArticleDraft,
    ) -> StoreResult<ApiResponse<Article>> {
        (**self).update(id, draft)
    }

    fn delete(&mut self, id: &ArticleId) -> StoreResult<ApiResponse<()>> {
        (**self).delete(id)
    }

    fn get_by_id(&mut self, id: &ArticleId) -> StoreResult<ApiResponse<Article>> {
        (**self).get_by_id(id)
    }
}

/// Article store persisting the whole collection as one JSON blob.
pub struct LocalArticleStore<B: StorageBackend, L: Latency = FixedLatency> {
    backend: B,
    latency: L,
    storage_key: String,
    seed_on_first_run: bool,
}

impl<B: StorageBackend> LocalArticleStore<B, FixedLatency> {
    /// Creates a store with the configured fixed latency.
    pub fn new(backend: B, config: &StoreConfig) -> Self {
        Self::with_latency(backend, FixedLatency::new(config.latency()), config)
    }
}

impl<B: StorageBackend, L: Latency> LocalArticleStore<B, L> {
    /// Creates a store with a caller-provided latency policy.
    pub fn with_latency(backend: B, latency: L, config: &StoreConfig) -> Self {
        Self {
            backend,
            latency,
            storage_key: config.storage_key.clone(),
            seed_on_first_run: config.seed_on_first_run,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn load(&mut self) -> StoreResult<Vec<Article>> {
        let Some(blob) = self.backend.get(&self.storage_key)? else {
            if !self.seed_on_first_run {
                return Ok(Vec::new());
            }
            let seed = seed_articles();
            self.persist(&seed)?;
            info!(
                "event=store_seed module=store status=ok key={} count={}",
                self.storage_key,
                seed.len()
            );
            return Ok(seed);
        };

        decode_collection(&self.storage_key, &blob)
    }

    fn persist(&mut self, articles: &[Article]) -> StoreResult<()> {
        let blob = encode_collection(articles)?;
        self.backend.set(&self.storage_key, &blob)?;
        Ok(())
    }

    fn run<T>(
        &mut self,
        event: &'static str,
        op: impl FnOnce(&mut Self) -> StoreResult<ApiResponse<T>>,
    ) -> StoreResult<ApiResponse<T>> {
        self.latency.wait();
        let started_at = Instant::now();
        let result = op(self);
        match &result {
            Ok(response) => info!(
                "event={event} module=store status=ok http_status={} duration_ms={}",
                response.status,
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event={event} module=store status=error http_status={} error_code={} duration_ms={}",
                err.status(),
                err.code(),
                started_at.elapsed().as_millis()
            ),
        }
        result
    }
}

impl<B: StorageBackend, L: Latency> ArticleApi for LocalArticleStore<B, L> {
    fn list(&mut self) -> StoreResult<ApiResponse<Vec<Article>>> {
        self.run("article_list", |store| store.load().map(ApiResponse::ok))
    }

    fn create(&mut self, draft: ArticleDraft) -> StoreResult<ApiResponse<Article>> {
        self.run("article_create", |store| {
            let mut articles = store.load()?;
            let article = draft.into_article(ArticleId::generate());
            articles.insert(0, article.clone());
            store.persist(&articles)?;
            Ok(ApiResponse::created(article))
        })
    }

    fn update(
        &mut self,
        id: &ArticleId,
        draft: ArticleDraft,
    ) -> StoreResult<ApiResponse<Article>> {
        self.run("article_update", |store| {
            let mut articles = store.load()?;
            let Some(slot) = articles.iter_mut().find(|article| &article.id == id) else {
                return Err(StoreError::NotFound(id.clone()));
            };
            *slot = draft.into_article(id.clone());
            let updated = slot.clone();
            store.persist(&articles)?;
            Ok(ApiResponse::ok(updated))
        })
    }

    fn delete(&mut self, id: &ArticleId) -> StoreResult<ApiResponse<()>> {
        self.run("article_delete", |store| {
            let articles = store.load()?;
            let before = articles.len();
            let remaining: Vec<Article> = articles
                .into_iter()
                .filter(|article| &article.id != id)
                .collect();
            if remaining.len() == before {
                return Err(StoreError::NotFound(id.clone()));
            }
            store.persist(&remaining)?;
            Ok(ApiResponse::ok(()))
        })
    }

    fn get_by_id(&mut self, id: &ArticleId) -> StoreResult<ApiResponse<Article>> {
        self.run("article_get", |store| {
            store
                .load()?
                .into_iter()
                .find(|article| &article.id == id)
                .map(ApiResponse::ok)
                .ok_or_else(|| StoreError::NotFound(id.clone()))
        })
    }
}

/// Serializes a collection into the persisted JSON array shape.
pub fn encode_collection(articles: &[Article]) -> StoreResult<String> {
    serde_json::to_string(articles).map_err(StoreError::Encode)
}

/// Parses the persisted JSON array shape.
///
/// Records with an empty id are rejected as corruption.
pub fn decode_collection(key: &str, blob: &str) -> StoreResult<Vec<Article>> {
    let articles: Vec<Article> =
        serde_json::from_str(blob).map_err(|err| StoreError::CorruptedState {
            key: key.to_string(),
            message: err.to_string(),
        })?;

    if let Some(index) = articles
        .iter()
        .position(|article| article.id.as_str().is_empty())
    {
        return Err(StoreError::CorruptedState {
            key: key.to_string(),
            message: format!("article at index {index} has an empty id"),
        });
    }

    Ok(articles)
}
