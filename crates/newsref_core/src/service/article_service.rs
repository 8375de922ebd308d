//! Article list use-case service.
//!
//! # Responsibility
//! - Hold the loaded collection, current query and revealed page.
//! - Validate drafts before they reach the store.
//! - Reload the full collection after every successful mutation.
//! - Remember the most recent failure message for display.
//!
//! # Invariants
//! - A failed call leaves the loaded collection and query untouched.
//! - A mutation the store accepted is reported as success even when the
//!   follow-up reload fails; the reload failure is only recorded.
//! - Failures are returned once and never retried.
//! - The projection is recomputed from the full collection on every read.

use crate::model::article::{Article, ArticleDraft, ArticleId, ArticleValidationError};
use crate::projection::list_view::{ListQuery, Projection};
use crate::store::article_store::{ArticleApi, StoreError};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for article list use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Draft rejected before reaching the store.
    Validation(ArticleValidationError),
    /// Target article does not exist.
    NotFound(ArticleId),
    /// Store-level failure other than not-found.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "Article not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl ServiceError {
    fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_failed",
            Self::NotFound(_) => "not_found",
            Self::Store(_) => "store_failed",
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::NotFound(id),
            other => Self::Store(other),
        }
    }
}

impl From<ArticleValidationError> for ServiceError {
    fn from(value: ArticleValidationError) -> Self {
        Self::Validation(value)
    }
}

/// List-view state over any `ArticleApi` implementation.
pub struct ArticleListService<A: ArticleApi> {
    api: A,
    articles: Vec<Article>,
    query: ListQuery,
    last_error: Option<String>,
}

impl<A: ArticleApi> ArticleListService<A> {
    /// Creates an empty list view. Call `reload` to fetch the collection.
    pub fn new(api: A) -> Self {
        Self {
            api,
            articles: Vec::new(),
            query: ListQuery::default(),
            last_error: None,
        }
    }

    /// Fetches the full collection, replacing what is loaded on success.
    pub fn reload(&mut self) -> Result<(), ServiceError> {
        let response = self.api.list();
        let response = self.record(response)?;
        self.articles = response.data;
        Ok(())
    }

    /// Replaces the query text and resets to the first page.
    pub fn search(&mut self, text: impl Into<String>) {
        self.query.set_text(text);
    }

    /// Reveals one more page if matches remain hidden.
    pub fn load_more(&mut self) -> bool {
        self.query.load_more(&self.articles)
    }

    /// Projects the loaded collection through the current query and page.
    pub fn view(&self) -> Projection<'_> {
        self.query.project(&self.articles)
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Validates and creates an article, then reloads the collection.
    pub fn create(&mut self, draft: ArticleDraft) -> Result<Article, ServiceError> {
        self.validate(&draft)?;
        let response = self.api.create(draft);
        let created = self.record(response)?.data;
        self.refresh_after_write();
        Ok(created)
    }

    /// Validates and replaces an article's content, then reloads.
    pub fn update(&mut self, id: &ArticleId, draft: ArticleDraft) -> Result<Article, ServiceError> {
        self.validate(&draft)?;
        let response = self.api.update(id, draft);
        let updated = self.record(response)?.data;
        self.refresh_after_write();
        Ok(updated)
    }

    /// Deletes an article, then reloads.
    pub fn delete(&mut self, id: &ArticleId) -> Result<(), ServiceError> {
        let response = self.api.delete(id);
        self.record(response)?;
        self.refresh_after_write();
        Ok(())
    }

    /// Fetches one article to prefill an edit form.
    pub fn load_for_edit(&mut self, id: &ArticleId) -> Result<Article, ServiceError> {
        let response = self.api.get_by_id(id);
        Ok(self.record(response)?.data)
    }

    /// Most recent failure message, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn api_mut(&mut self) -> &mut A {
        &mut self.api
    }

    pub fn into_api(self) -> A {
        self.api
    }

    /// Clears the previous error, then reloads. A reload failure stays in
    /// `last_error` and the previously loaded collection is kept.
    fn refresh_after_write(&mut self) {
        self.last_error = None;
        if self.reload().is_err() {
            warn!("event=list_reload module=service status=stale after=mutation");
        }
    }

    fn validate(&mut self, draft: &ArticleDraft) -> Result<(), ServiceError> {
        draft.validate().map_err(|err| self.fail(err.into()))
    }

    fn record<T>(&mut self, result: Result<T, StoreError>) -> Result<T, ServiceError> {
        result.map_err(|err| self.fail(err.into()))
    }

    fn fail(&mut self, err: ServiceError) -> ServiceError {
        warn!(
            "event=list_service module=service status=error error_code={}",
            err.kind()
        );
        self.last_error = Some(err.to_string());
        err
    }
}
